//! Builder for constructing BuildConfiguration.

use super::BuildConfiguration;
use super::core::{DEFAULT_ARTIFACT_NAME, DEFAULT_ENTRY_POINT, DEFAULT_OUTPUT_PATH};
use std::fmt;
use std::path::{Path, PathBuf};

/// A configuration field that can fall back to its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    EntryPoint,
    OutputPath,
    ArtifactName,
}

impl ConfigField {
    /// The value used when the field is not supplied.
    pub fn default_value(self) -> &'static str {
        match self {
            ConfigField::EntryPoint => DEFAULT_ENTRY_POINT,
            ConfigField::OutputPath => DEFAULT_OUTPUT_PATH,
            ConfigField::ArtifactName => DEFAULT_ARTIFACT_NAME,
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigField::EntryPoint => f.write_str("entry point"),
            ConfigField::OutputPath => f.write_str("output path"),
            ConfigField::ArtifactName => f.write_str("artifact name"),
        }
    }
}

/// Builder for constructing [`BuildConfiguration`].
///
/// Every field is optional. Fields left unset take the documented defaults when
/// [`build`](Self::build) runs. Building never touches the filesystem: a missing
/// entry point is reported later by the engine.
///
/// # Examples
///
/// ```no_run
/// use form_bundler::bundler::{ConfigField, SettingsBuilder};
///
/// let builder = SettingsBuilder::new().artifact_name("my-form");
/// assert_eq!(
///     builder.defaulted(),
///     vec![ConfigField::EntryPoint, ConfigField::OutputPath]
/// );
///
/// let config = builder.build();
/// assert_eq!(config.output_path().to_str(), Some("./dist/form.js"));
/// ```
#[derive(Default, Debug, Clone)]
pub struct SettingsBuilder {
    entry_point: Option<PathBuf>,
    output_path: Option<PathBuf>,
    artifact_name: Option<String>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates a builder from up to three positional arguments, in order:
    /// entry point, output path, artifact name.
    pub fn from_positional<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        Self {
            entry_point: args.next().map(PathBuf::from),
            output_path: args.next().map(PathBuf::from),
            artifact_name: args.next(),
        }
    }

    /// Sets the entry point.
    ///
    /// Default: `./src/index.tsx`
    pub fn entry_point<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.entry_point = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the artifact path.
    ///
    /// Default: `./dist/form.js`
    pub fn output_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the artifact name.
    ///
    /// Default: `custom-form`
    pub fn artifact_name(mut self, name: impl Into<String>) -> Self {
        self.artifact_name = Some(name.into());
        self
    }

    /// Lists the fields that will fall back to their defaults.
    pub fn defaulted(&self) -> Vec<ConfigField> {
        let mut fields = Vec::new();
        if self.entry_point.is_none() {
            fields.push(ConfigField::EntryPoint);
        }
        if self.output_path.is_none() {
            fields.push(ConfigField::OutputPath);
        }
        if self.artifact_name.is_none() {
            fields.push(ConfigField::ArtifactName);
        }
        fields
    }

    /// Builds the configuration, filling gaps with defaults.
    pub fn build(self) -> BuildConfiguration {
        BuildConfiguration::new(
            self.entry_point
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ENTRY_POINT)),
            self.output_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
            self.artifact_name
                .unwrap_or_else(|| DEFAULT_ARTIFACT_NAME.to_string()),
        )
    }
}
