//! Artifact measurement and manifest emission.

use crate::bundler::{
    BuildConfiguration, Result,
    error::ErrorExt,
    manifest::{BuildManifest, manifest_path},
    settings::external_package_names,
    utils::fs::write_atomic,
};
use std::path::PathBuf;

/// Manifest written for a finished build.
#[derive(Debug, Clone)]
pub struct FinalizedBuild {
    pub manifest: BuildManifest,
    pub manifest_path: PathBuf,
    /// The manifest exactly as written to disk
    pub manifest_json: String,
}

/// Measures the committed artifact and writes its manifest next to it.
///
/// Must only run after the artifact has been moved into place: the recorded size
/// is read back from storage, not taken from the engine.
pub async fn finalize(
    config: &BuildConfiguration,
    version: &str,
    built_at: &str,
) -> Result<FinalizedBuild> {
    let artifact = config.output_path();
    let size_bytes = tokio::fs::metadata(artifact)
        .await
        .fs_context("reading artifact metadata", artifact)?
        .len();

    let manifest = BuildManifest {
        form_name: config.artifact_name().to_string(),
        version: version.to_string(),
        built_at: built_at.to_string(),
        size_bytes,
        entry_point: config.entry_point().display().to_string(),
        externals: external_package_names(),
    };

    let manifest_path = manifest_path(artifact);
    let manifest_json = manifest.to_json()?;
    write_atomic(&manifest_path, manifest_json.as_bytes()).await?;

    log::info!(
        "Wrote manifest {} ({} byte artifact)",
        manifest_path.display(),
        size_bytes
    );

    Ok(FinalizedBuild {
        manifest,
        manifest_path,
        manifest_json,
    })
}
