use std::path::PathBuf;

use thiserror::Error;

/// Details attached to a descriptor that matched but could not be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorFailure {
    /// Path of the offending `package.json`
    pub path: PathBuf,
    /// Underlying parser diagnostic
    pub diagnostic: String,
}

#[derive(Debug, Error)]
pub enum ResolveError {
    /// A sibling `package.json` exists but is not valid JSON
    #[error("{message}")]
    MalformedDescriptor {
        message: String,
        payload: DescriptorFailure,
    },

    /// A sibling `package.json` exists but could not be read
    #[error("Failed to read package descriptor {}: {source}", path.display())]
    UnreadableDescriptor {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResolveError {
    pub(crate) fn malformed(path: PathBuf, err: &serde_json::Error) -> Self {
        let diagnostic = err.to_string();
        Self::MalformedDescriptor {
            message: format!(
                "Failed to parse package descriptor {}: {}",
                path.display(),
                diagnostic
            ),
            payload: DescriptorFailure { path, diagnostic },
        }
    }

    /// Path of the descriptor that caused the failure
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::MalformedDescriptor { payload, .. } => &payload.path,
            Self::UnreadableDescriptor { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_carries_path_and_diagnostic() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ResolveError::malformed(PathBuf::from("/app/package.json"), &parse_err);

        let ResolveError::MalformedDescriptor { message, payload } = &err else {
            panic!("expected MalformedDescriptor, got {err:?}");
        };
        assert_eq!(payload.path, PathBuf::from("/app/package.json"));
        assert_eq!(payload.diagnostic, parse_err.to_string());
        assert!(message.contains("/app/package.json"));
        assert_eq!(err.to_string(), *message);
        assert_eq!(err.path(), std::path::Path::new("/app/package.json"));
    }

    #[test]
    fn unreadable_display_includes_path() {
        let err = ResolveError::UnreadableDescriptor {
            path: PathBuf::from("/app/package.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(
            err.to_string(),
            "Failed to read package descriptor /app/package.json: denied"
        );
    }
}
