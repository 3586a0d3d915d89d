//! Version line for host CLIs

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::config::UNKNOWN_VERSION;
use crate::resolver::Resolution;

/// What a host prints for `--version` or in a diagnostic banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionReport {
    pub program: String,
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<PathBuf>,
}

impl VersionReport {
    pub fn new(program: impl Into<String>, version: Option<String>) -> Self {
        Self {
            program: program.into(),
            version,
            descriptor: None,
        }
    }

    pub fn from_resolution(program: impl Into<String>, resolution: Resolution) -> Self {
        match resolution {
            Resolution::NotFound => Self::new(program, None),
            Resolution::Found {
                descriptor,
                version,
            } => Self {
                program: program.into(),
                version,
                descriptor: Some(descriptor),
            },
        }
    }

    /// Version to display, falling back to `unknown`
    pub fn display_version(&self) -> &str {
        self.version.as_deref().unwrap_or(UNKNOWN_VERSION)
    }
}

impl fmt::Display for VersionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.program, self.display_version())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_includes_resolved_version() {
        let report = VersionReport::new("mytool", Some("1.4.0".to_string()));
        assert_eq!(report.to_string(), "mytool 1.4.0");
    }

    #[test]
    fn display_falls_back_to_unknown() {
        let report = VersionReport::new("mytool", None);
        assert_eq!(report.to_string(), "mytool unknown");
    }

    #[test]
    fn from_resolution_keeps_descriptor_path() {
        let report = VersionReport::from_resolution(
            "mytool",
            Resolution::Found {
                descriptor: PathBuf::from("/app/package.json"),
                version: None,
            },
        );

        assert_eq!(report.descriptor, Some(PathBuf::from("/app/package.json")));
        assert_eq!(report.display_version(), "unknown");
    }

    #[test]
    fn serializes_to_json() {
        let report = VersionReport::from_resolution(
            "mytool",
            Resolution::Found {
                descriptor: PathBuf::from("/app/package.json"),
                version: Some("0.3.0".to_string()),
            },
        );

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "program": "mytool",
                "version": "0.3.0",
                "descriptor": "/app/package.json"
            })
        );
        assert_eq!(
            serde_json::to_value(VersionReport::new("mytool", None)).unwrap(),
            json!({ "program": "mytool", "version": null })
        );
    }
}
