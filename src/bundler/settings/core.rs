//! Core BuildConfiguration struct and implementations.

use std::path::{Path, PathBuf};

/// Entry point used when none is given.
pub const DEFAULT_ENTRY_POINT: &str = "./src/index.tsx";

/// Artifact path used when none is given.
pub const DEFAULT_OUTPUT_PATH: &str = "./dist/form.js";

/// Artifact name used when none is given.
pub const DEFAULT_ARTIFACT_NAME: &str = "custom-form";

/// Resolved inputs of a single build.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder) and immutable afterwards.
/// Each build owns its configuration; nothing about a build lives in process-global state.
///
/// # Examples
///
/// ```no_run
/// use form_bundler::bundler::SettingsBuilder;
///
/// let config = SettingsBuilder::new()
///     .entry_point("forms/survey/index.tsx")
///     .output_path("dist/survey.js")
///     .artifact_name("survey-form")
///     .build();
///
/// assert_eq!(config.artifact_name(), "survey-form");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildConfiguration {
    /// Source entry point of the form.
    entry_point: PathBuf,

    /// Where the artifact is written.
    output_path: PathBuf,

    /// Human-readable artifact name, also the basis of the global identifier.
    artifact_name: String,
}

impl BuildConfiguration {
    /// Returns the entry point path.
    pub fn entry_point(&self) -> &Path {
        &self.entry_point
    }

    /// Returns the artifact path.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Returns the artifact name.
    pub fn artifact_name(&self) -> &str {
        &self.artifact_name
    }

    /// Returns the directory the artifact is written into.
    ///
    /// A bare file name such as `form.js` resolves to the current directory.
    pub fn output_dir(&self) -> &Path {
        match self.output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Creates a new configuration (used by SettingsBuilder).
    pub(super) fn new(entry_point: PathBuf, output_path: PathBuf, artifact_name: String) -> Self {
        Self {
            entry_point,
            output_path,
            artifact_name,
        }
    }
}
