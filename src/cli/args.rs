//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap. The three positionals
//! are kept optional here and resolved against their defaults by
//! [`SettingsBuilder`], which also reports which defaults were applied.

use crate::bundler::{Loader, SettingsBuilder, settings::parse_loader_override};
use clap::Parser;
use std::path::PathBuf;

/// Form bundler for host-rendered browser forms
#[derive(Parser, Debug)]
#[command(
    name = "form_bundler",
    version,
    about = "Bundles a form module into a self-contained browser artifact",
    long_about = "Bundles a form's entry point into one minified, self-invoking script that binds \
to the host page's React and ReactDOM globals, and writes a JSON manifest next to it.

Usage:
  form_bundler
  form_bundler src/index.tsx dist/survey.js survey-form
  form_bundler forms/intake.tsx dist/intake.js intake --loader .svg=dataurl

The host page must define the React and ReactDOM globals before loading an artifact.

Exit code 0 = artifact and manifest written. Non-zero = nothing was changed."
)]
pub struct Args {
    /// Form entry point [default: ./src/index.tsx]
    #[arg(value_name = "ENTRY")]
    pub entry: Option<PathBuf>,

    /// Artifact path; the manifest is written beside it with a .meta.json extension
    /// [default: ./dist/form.js]
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Artifact name, also the basis of the bundle's global identifier
    /// [default: custom-form]
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Version recorded in the manifest
    #[arg(long = "form-version", env = "npm_package_version", value_name = "VERSION")]
    pub form_version: Option<String>,

    /// Map a file extension to an esbuild loader (repeatable)
    #[arg(long = "loader", value_name = ".EXT=LOADER", value_parser = parse_loader_override)]
    pub loaders: Vec<(String, Loader)>,

    /// esbuild executable to use instead of searching node_modules and PATH
    #[arg(long, env = "FORM_BUNDLER_ESBUILD", value_name = "PATH")]
    pub esbuild: Option<PathBuf>,

    /// Project settings file [default: ./formpack.toml if present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only print warnings, errors and the manifest
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if let Some(entry) = &self.entry {
            if entry.as_os_str().is_empty() {
                return Err("Entry point cannot be empty".to_string());
            }
        }

        if let Some(output) = &self.output {
            if output.file_name().is_none() {
                return Err(format!(
                    "Output path {} does not name a file",
                    output.display()
                ));
            }
        }

        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err("Artifact name cannot be empty".to_string());
            }
        }

        Ok(())
    }

    /// Positionals as a settings builder; unset ones fall back to defaults.
    pub fn settings_builder(&self) -> SettingsBuilder {
        let mut builder = SettingsBuilder::new();
        if let Some(entry) = &self.entry {
            builder = builder.entry_point(entry);
        }
        if let Some(output) = &self.output {
            builder = builder.output_path(output);
        }
        if let Some(name) = &self.name {
            builder = builder.artifact_name(name.as_str());
        }
        builder
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print a detail line unless in quiet mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print warning message
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}
