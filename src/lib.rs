//! Best-effort discovery of the host application's version
//!
//! Given the directories a module loader would search (`<dir>/node_modules`
//! for the entry directory and each of its ancestors), find the first
//! `package.json` sitting next to one of them and report its `version`.
//!
//! ```no_run
//! use pkg_version_probe::{SearchPath, VersionReport, resolve};
//!
//! let search_path = SearchPath::from_current_exe().unwrap_or_default();
//! let version = resolve(&search_path)?;
//! println!("{}", VersionReport::new("mytool", version));
//! # Ok::<(), pkg_version_probe::ResolveError>(())
//! ```

pub mod config;
pub mod logging;
pub mod report;
pub mod resolver;

pub use report::VersionReport;
pub use resolver::{
    DescriptorFailure, DescriptorSource, LocalFs, Resolution, ResolveError, SearchPath,
    VersionResolver, resolve,
};
