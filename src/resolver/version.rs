//! Host package version lookup

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::{DESCRIPTOR_FILE_NAME, MODULES_DIR_NAME};
use crate::resolver::descriptor::{DescriptorSource, LocalFs, PackageDescriptor};
use crate::resolver::error::ResolveError;
use crate::resolver::segments::PathSegments;

/// Outcome of a descriptor search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No candidate had a sibling descriptor (or there were no candidates)
    NotFound,
    /// The first existing sibling descriptor and its raw `version` field
    Found {
        descriptor: PathBuf,
        version: Option<String>,
    },
}

impl Resolution {
    pub fn version(&self) -> Option<&str> {
        match self {
            Resolution::NotFound => None,
            Resolution::Found { version, .. } => version.as_deref(),
        }
    }

    pub fn into_version(self) -> Option<String> {
        match self {
            Resolution::NotFound => None,
            Resolution::Found { version, .. } => version,
        }
    }

    pub fn descriptor(&self) -> Option<&std::path::Path> {
        match self {
            Resolution::NotFound => None,
            Resolution::Found { descriptor, .. } => Some(descriptor),
        }
    }
}

/// Scans candidate `node_modules` directories for the host's package.json
///
/// Each call re-reads the filesystem; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct VersionResolver<S = LocalFs> {
    source: S,
    separator: char,
}

impl VersionResolver<LocalFs> {
    pub fn new() -> Self {
        Self::with_source(LocalFs)
    }
}

impl Default for VersionResolver<LocalFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DescriptorSource> VersionResolver<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            separator: std::path::MAIN_SEPARATOR,
        }
    }

    /// Override the separator used to split candidate paths
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Sibling descriptor path for a candidate, or `None` when the candidate
    /// does not end in `node_modules` or has no parent directory to anchor a
    /// package.
    pub fn descriptor_candidate(&self, path: &str) -> Option<String> {
        let mut segments = PathSegments::split(path, self.separator);

        if segments.pop() != Some(MODULES_DIR_NAME) || segments.len() <= 1 {
            return None;
        }

        segments.push(DESCRIPTOR_FILE_NAME);
        Some(segments.join())
    }

    /// Find the first candidate whose sibling descriptor exists and read it.
    ///
    /// The search stops at the first existing descriptor even when it has no
    /// `version`. A descriptor that cannot be read or parsed aborts the search.
    pub fn locate<I, P>(&self, candidate_paths: I) -> Result<Resolution, ResolveError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let mut candidates = candidate_paths.into_iter().peekable();
        if candidates.peek().is_none() {
            debug!("No candidate paths supplied");
            return Ok(Resolution::NotFound);
        }

        for candidate in candidates {
            let candidate = candidate.as_ref();

            let Some(descriptor) = self.descriptor_candidate(candidate) else {
                debug!("Skipping candidate {:?}", candidate);
                continue;
            };

            let descriptor = PathBuf::from(descriptor);
            if !self.source.exists(&descriptor) {
                debug!("No descriptor at {:?}", descriptor);
                continue;
            }

            let content = self.source.read(&descriptor).map_err(|source| {
                ResolveError::UnreadableDescriptor {
                    path: descriptor.clone(),
                    source,
                }
            })?;

            let parsed = PackageDescriptor::parse(&content)
                .map_err(|e| ResolveError::malformed(descriptor.clone(), &e))?;

            info!(
                "Resolved descriptor {:?} (version: {:?})",
                descriptor, parsed.version
            );

            return Ok(Resolution::Found {
                descriptor,
                version: parsed.version,
            });
        }

        Ok(Resolution::NotFound)
    }

    /// Version of the first existing sibling descriptor, if any
    pub fn resolve<I, P>(&self, candidate_paths: I) -> Result<Option<String>, ResolveError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        self.locate(candidate_paths).map(Resolution::into_version)
    }
}

/// Resolve against the local filesystem using the platform separator
pub fn resolve<I, P>(candidate_paths: I) -> Result<Option<String>, ResolveError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    VersionResolver::new().resolve(candidate_paths)
}
