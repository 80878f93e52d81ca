//! Project settings from `formpack.toml`.
//!
//! The file is optional. It lets a form project pin the version recorded in its
//! manifests and extend the loader table without repeating flags on every build:
//!
//! ```toml
//! [form]
//! version = "2.4.0"
//!
//! [loaders]
//! ".svg" = "dataurl"
//! ".md" = "text"
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// File name looked up in the working directory when no path is given.
pub const PROJECT_FILE: &str = "formpack.toml";

/// Parsed contents of `formpack.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// `[form]` section
    #[serde(default)]
    pub form: FormSection,

    /// `[loaders]` section: extension → loader name
    #[serde(default)]
    pub loaders: BTreeMap<String, String>,
}

/// `[form]` section of `formpack.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormSection {
    /// Version recorded in build manifests
    pub version: Option<String>,
}

/// Parses project settings from TOML text.
pub fn parse_project_config(text: &str) -> anyhow::Result<ProjectConfig> {
    Ok(toml::from_str(text)?)
}

/// Loads project settings from `path`.
///
/// A missing file yields the empty default unless `required` is set, which is the
/// case when the user named the file explicitly.
pub fn load_project_config(path: &Path, required: bool) -> anyhow::Result<ProjectConfig> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
            log::debug!("No project file at {}", path.display());
            return Ok(ProjectConfig::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    let config = parse_project_config(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    log::info!("Loaded project settings from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_version_and_loaders() {
        let config = parse_project_config(
            r#"
            [form]
            version = "2.4.0"

            [loaders]
            ".svg" = "dataurl"
            "#,
        )
        .unwrap();
        assert_eq!(config.form.version.as_deref(), Some("2.4.0"));
        assert_eq!(config.loaders.get(".svg").map(String::as_str), Some("dataurl"));
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(parse_project_config("").unwrap(), ProjectConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_project_config("[form]\nnmae = \"typo\"\n").is_err());
        assert!(parse_project_config("[output]\ndir = \"x\"\n").is_err());
    }

    #[test]
    fn missing_file_only_fails_when_required() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join(PROJECT_FILE);
        assert_eq!(
            load_project_config(&path, false).unwrap(),
            ProjectConfig::default()
        );

        let err = load_project_config(&path, true).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
