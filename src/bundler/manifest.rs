//! Build manifest written next to each artifact.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Version recorded when nothing else supplies one.
pub const FALLBACK_VERSION: &str = "1.0.0";

/// Sidecar metadata describing one successful build.
///
/// Serialized with camelCase keys:
///
/// ```json
/// {
///   "formName": "my-form",
///   "version": "1.0.0",
///   "builtAt": "2026-10-19T08:30:00.000Z",
///   "sizeBytes": 4182,
///   "entryPoint": "./src/index.tsx",
///   "externals": ["react", "react-dom"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildManifest {
    pub form_name: String,
    pub version: String,
    /// ISO-8601, UTC, millisecond precision
    pub built_at: String,
    pub size_bytes: u64,
    pub entry_point: String,
    pub externals: Vec<String>,
}

impl BuildManifest {
    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Picks the manifest version: an explicit value (flag or `npm_package_version`),
/// then the project file, then [`FALLBACK_VERSION`]. Blank values are skipped.
pub fn resolve_version(explicit: Option<&str>, project: Option<&str>) -> String {
    [explicit, project]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or(FALLBACK_VERSION)
        .to_string()
}

/// Where the manifest for `artifact` lives: the artifact's extension is replaced
/// by `meta.json`, so `dist/x.js` maps to `dist/x.meta.json`.
pub fn manifest_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("meta.json")
}
