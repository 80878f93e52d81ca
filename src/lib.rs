//! Form bundler library for packaging host-rendered browser forms.
//!
//! This library turns a single form's source entry point into:
//! - a minified, self-invoking artifact scoped under its own global
//! - a source map beside it
//! - a `.meta.json` manifest describing the build
//!
//! The React runtime is excluded from every artifact and bound to the host page's
//! `React`/`ReactDOM` globals at load time.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
