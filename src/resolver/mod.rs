//! Host version resolution layer
//!
//! Locates the `package.json` that sits next to one of the host's
//! `node_modules` directories and reads its `version` field.
//!
//! # Flow
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌──────────────────┐
//! │ SearchPath  │────▶│ VersionResolver │────▶│ DescriptorSource │
//! │ (candidates)│     │  (linear scan)  │     │ (exists / read)  │
//! └─────────────┘     └─────────────────┘     └──────────────────┘
//!                              │
//!                              ▼
//!                     ┌─────────────────┐
//!                     │PackageDescriptor│
//!                     │ (JSON version)  │
//!                     └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`descriptor`]: Filesystem seam and package.json parsing
//! - [`error`]: Fatal resolution errors
//! - [`search_path`]: Candidate list construction
//! - [`segments`]: Separator-based path splitting
//! - [`version`]: The resolver itself

pub mod descriptor;
pub mod error;
pub mod search_path;
pub mod segments;
pub mod version;

pub use descriptor::{DescriptorSource, LocalFs, PackageDescriptor};
pub use error::{DescriptorFailure, ResolveError};
pub use search_path::SearchPath;
pub use segments::PathSegments;
pub use version::{Resolution, VersionResolver, resolve};
