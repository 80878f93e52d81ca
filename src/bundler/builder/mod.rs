//! Build orchestration and coordination.
//!
//! This module provides the main [`Bundler`] orchestrator that drives one form
//! through the pipeline.
//!
//! # Overview
//!
//! The bundler:
//! 1. Takes a resolved [`BuildConfiguration`](crate::bundler::BuildConfiguration)
//! 2. Runs esbuild against a staging directory
//! 3. Commits the produced files next to each other in the output directory
//! 4. Writes the [`BuildManifest`](crate::bundler::BuildManifest) sidecar
//! 5. Returns a [`BuildOutcome`]
//!
//! # Module Organization
//!
//! - [`finalize`] - Artifact measurement and manifest emission
//! - [`orchestrator`] - Main [`Bundler`] struct and build steps
//! - [`tool_detection`] - esbuild executable discovery

mod finalize;
mod orchestrator;
mod tool_detection;

pub use finalize::{FinalizedBuild, finalize};
pub use orchestrator::{BuildOutcome, Bundler};
pub use tool_detection::locate_esbuild;
