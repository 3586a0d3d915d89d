//! Candidate directory lists in module-loader order

use std::borrow::Cow;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::config::MODULES_DIR_NAME;

/// Ordered candidate directories, nearest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    paths: Vec<String>,
}

impl SearchPath {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Build the lookup chain a module loader would use for an entry module
    /// living in `dir`: `dir/node_modules`, then each ancestor's
    /// `node_modules`, up to the filesystem root. Ancestors that are
    /// themselves `node_modules` directories are not nested again.
    ///
    /// A relative `dir` is resolved against the current directory first.
    pub fn from_entry_dir(dir: &Path) -> io::Result<Self> {
        let dir = std::path::absolute(dir)?;
        Ok(Self::from_absolute_dir(&dir))
    }

    fn from_absolute_dir(dir: &Path) -> Self {
        let lossy = dir.to_string_lossy();
        let dir: Cow<'_, str> = if cfg!(windows) {
            strip_verbatim_prefix(&lossy)
        } else {
            Cow::Borrowed(&*lossy)
        };

        let paths = Path::new(&*dir)
            .ancestors()
            .filter(|ancestor| !ancestor.as_os_str().is_empty())
            .filter(|ancestor| {
                ancestor
                    .file_name()
                    .is_none_or(|name| name != MODULES_DIR_NAME)
            })
            .map(|ancestor| {
                ancestor
                    .join(MODULES_DIR_NAME)
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();

        Self { paths }
    }

    /// Lookup chain for the directory holding the running executable, or
    /// `None` when that location cannot be determined.
    pub fn from_current_exe() -> Option<Self> {
        let exe = match std::env::current_exe() {
            Ok(exe) => exe,
            Err(e) => {
                debug!("Current executable location unavailable: {}", e);
                return None;
            }
        };

        let dir = exe.parent()?;
        Some(Self::from_absolute_dir(dir))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Drop the `\\?\` verbatim prefix from drive and UNC paths so the drive
/// root stays a single segment when split on `\`.
fn strip_verbatim_prefix(path: &str) -> Cow<'_, str> {
    if let Some(rest) = path.strip_prefix(r"\\?\UNC\") {
        Cow::Owned(format!(r"\\{rest}"))
    } else if let Some(rest) = path.strip_prefix(r"\\?\")
        && rest.as_bytes().get(1) == Some(&b':')
    {
        Cow::Borrowed(rest)
    } else {
        Cow::Borrowed(path)
    }
}

impl<'a> IntoIterator for &'a SearchPath {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
