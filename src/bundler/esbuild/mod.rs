//! esbuild integration.
//!
//! Turns a [`BuildConfiguration`](crate::bundler::BuildConfiguration) into engine
//! arguments, runs the engine, and interprets what it reports.
//!
//! # Module Organization
//!
//! - [`banner`] - Prologue binding externalized packages to host globals
//! - [`descriptor`] - [`BundleDescriptor`] and the global identifier rule
//! - [`diagnostics`] - Parsing of warnings and errors from stderr
//! - [`runner`] - Process execution
//! - [`sourcemap`] - Source path fix-up for staged maps

mod banner;
mod descriptor;
mod diagnostics;
mod runner;
mod sourcemap;

pub use banner::render_banner;
pub use descriptor::{BundleDescriptor, FORMAT, PLATFORM, TARGET, global_identifier};
pub use diagnostics::{Diagnostic, Severity, parse_diagnostics};
pub use runner::{EngineReport, Esbuild};
pub use sourcemap::{rebase_sourcemap_file, rebase_sources};
