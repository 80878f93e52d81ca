//! Form bundling pipeline.
//!
//! Turns a form's source entry point into a minified, self-invoking browser
//! artifact plus a JSON manifest describing it. The shared rendering runtime
//! (`react`, `react-dom`) is never bundled: the artifact binds to the globals the
//! host page already provides.
//!
//! # Example
//!
//! ```no_run
//! use form_bundler::bundler::{Bundler, Esbuild, SettingsBuilder, locate_esbuild};
//! use std::path::Path;
//!
//! # async fn example() -> form_bundler::bundler::Result<()> {
//! let config = SettingsBuilder::from_positional(["src/index.tsx", "dist/x.js", "my-form"]).build();
//! let esbuild = Esbuild::new(locate_esbuild(None, Path::new("."))?);
//!
//! let outcome = Bundler::new(config, esbuild).build().await?;
//! println!("{}", outcome.manifest_json);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod esbuild;
pub mod manifest;
pub mod settings;
pub mod utils;

pub use builder::{BuildOutcome, Bundler, locate_esbuild};
pub use error::{Error, Result};
pub use esbuild::{BundleDescriptor, Diagnostic, Esbuild, Severity, global_identifier};
pub use manifest::{BuildManifest, FALLBACK_VERSION, manifest_path, resolve_version};
pub use settings::{BuildConfiguration, ConfigField, Loader, LoaderMap, SettingsBuilder};
