//! Configuration structures for bundling operations.
//!
//! This module resolves the inputs of a build: the [`BuildConfiguration`]
//! (entry point, artifact path, artifact name) with its documented defaults,
//! the extension → loader table, and the fixed set of packages bound to host
//! globals instead of being bundled.

mod builder;
mod core;
mod externals;
mod loader;

// Re-export all public types
pub use builder::{ConfigField, SettingsBuilder};
pub use self::core::{BuildConfiguration, DEFAULT_ARTIFACT_NAME, DEFAULT_ENTRY_POINT, DEFAULT_OUTPUT_PATH};
pub use externals::{EXTERNALS, ExternalGlobal, external_package_names};
pub use loader::{Loader, LoaderMap, parse_loader_override};
