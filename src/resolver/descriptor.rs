//! package.json access and parsing

use std::io;
use std::path::Path;

#[cfg(test)]
use mockall::automock;
use serde_json::Value;
use tracing::warn;

/// Filesystem primitives needed to probe for a descriptor
#[cfg_attr(test, automock)]
pub trait DescriptorSource {
    /// Check whether a file exists at the given path
    fn exists(&self, path: &Path) -> bool;

    /// Read the raw contents of the file at the given path
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Blocking access to the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl DescriptorSource for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// Parsed contents of a package.json; only `version` is retained
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageDescriptor {
    pub version: Option<String>,
}

impl PackageDescriptor {
    /// Parse a descriptor. Only JSON well-formedness is checked. A string
    /// `version` is kept verbatim, a number or boolean is kept as its JSON
    /// text, and anything else yields `None`.
    pub fn parse(content: &[u8]) -> Result<Self, serde_json::Error> {
        let document: Value = serde_json::from_slice(content)?;

        let version = match document.get("version") {
            None | Some(Value::Null) => None,
            Some(Value::String(version)) => Some(version.clone()),
            Some(scalar @ (Value::Number(_) | Value::Bool(_))) => Some(scalar.to_string()),
            Some(other) => {
                warn!("Ignoring non-scalar version field: {}", other);
                None
            }
        };

        Ok(Self { version })
    }
}
