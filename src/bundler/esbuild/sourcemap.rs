//! Source map fix-up after staging.
//!
//! esbuild records `sources` relative to the directory the map is written into.
//! Maps are staged one directory below their final location, so every source path
//! carries one `../` too many once the map is moved up.

use crate::bundler::error::{Error, ErrorExt, Result};
use serde_json::Value;
use std::path::Path;

/// Strips one leading `../` from each entry of `sources`.
///
/// Maps that declare a non-empty `sourceRoot` are returned unchanged.
pub fn rebase_sources(map: &str) -> Result<String> {
    let mut value: Value = serde_json::from_str(map)?;

    let has_root = value
        .get("sourceRoot")
        .and_then(Value::as_str)
        .is_some_and(|root| !root.is_empty());
    if has_root {
        return Ok(map.to_string());
    }

    let Some(sources) = value.get_mut("sources").and_then(Value::as_array_mut) else {
        return Err(Error::GenericError(
            "source map has no `sources` array".to_string(),
        ));
    };

    for source in sources.iter_mut() {
        if let Some(path) = source.as_str() {
            if let Some(stripped) = path.strip_prefix("../") {
                *source = Value::String(stripped.to_string());
            }
        }
    }

    Ok(serde_json::to_string(&value)?)
}

/// Rewrites a staged map file in place.
pub async fn rebase_sourcemap_file(path: &Path) -> Result<()> {
    let map = tokio::fs::read_to_string(path)
        .await
        .fs_context("reading source map", path)?;
    let rebased = rebase_sources(&map)?;
    tokio::fs::write(path, rebased)
        .await
        .fs_context("writing source map", path)
}
