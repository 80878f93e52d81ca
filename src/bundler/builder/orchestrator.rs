//! Main bundler orchestration and coordination.
//!
//! This module provides the [`Bundler`] orchestrator that carries one form from its
//! entry point to a committed artifact and manifest.

use crate::bundler::{
    BuildConfiguration, Result,
    error::Context,
    esbuild::{BundleDescriptor, Diagnostic, EngineReport, Esbuild, rebase_sourcemap_file},
    manifest::{BuildManifest, FALLBACK_VERSION, manifest_path},
    settings::LoaderMap,
    utils::fs::{StagingDir, create_dir_all, replace_file},
};
use chrono::{SecondsFormat, Utc};
use std::path::{Path, PathBuf};

use super::finalize::finalize;

/// Result of a successful build.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub artifact_path: PathBuf,
    pub manifest_path: PathBuf,
    pub manifest: BuildManifest,
    /// The manifest exactly as written to disk
    pub manifest_json: String,
    /// Every output file moved into the output directory
    pub committed: Vec<PathBuf>,
    /// Non-fatal engine diagnostics
    pub warnings: Vec<Diagnostic>,
}

/// Main bundler orchestrator.
///
/// Runs the pipeline for a single [`BuildConfiguration`]:
///
/// 1. Creates the output directory (and missing parents)
/// 2. Runs esbuild into a staging directory beside the artifact
/// 3. Moves the source map, then the artifact, into place
/// 4. Measures the artifact and writes its manifest
///
/// A fatal engine error ends the run after step 2 with nothing committed, so
/// outputs of an earlier successful build stay as they were. Each `Bundler` owns
/// its configuration; independent instances share no state.
///
/// # Examples
///
/// ```no_run
/// use form_bundler::bundler::{Bundler, Esbuild, SettingsBuilder};
///
/// # async fn example() -> form_bundler::bundler::Result<()> {
/// let config = SettingsBuilder::new()
///     .entry_point("src/index.tsx")
///     .output_path("dist/survey.js")
///     .artifact_name("survey-form")
///     .build();
///
/// let outcome = Bundler::new(config, Esbuild::new("esbuild"))
///     .version("2.1.0")
///     .build()
///     .await?;
///
/// println!("{} bytes", outcome.manifest.size_bytes);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Bundler {
    config: BuildConfiguration,
    engine: Esbuild,
    loaders: LoaderMap,
    version: String,
}

impl Bundler {
    /// Creates a bundler with the default loader table and fallback version.
    pub fn new(config: BuildConfiguration, engine: Esbuild) -> Self {
        Self {
            config,
            engine,
            loaders: LoaderMap::default(),
            version: FALLBACK_VERSION.to_string(),
        }
    }

    /// Replaces the extension → loader table.
    pub fn loaders(mut self, loaders: LoaderMap) -> Self {
        self.loaders = loaders;
        self
    }

    /// Sets the version recorded in the manifest.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Returns the configuration this bundler builds.
    pub fn config(&self) -> &BuildConfiguration {
        &self.config
    }

    /// Runs the full pipeline.
    pub async fn build(&self) -> Result<BuildOutcome> {
        let built_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let artifact = self.config.output_path();
        let out_dir = self.config.output_dir();

        log::info!(
            "Bundling {} as {} into {}",
            self.config.entry_point().display(),
            self.config.artifact_name(),
            artifact.display()
        );

        create_dir_all(out_dir).await?;

        let file_name = artifact
            .file_name()
            .context(format!("output path {} has no file name", artifact.display()))?;

        let staging = StagingDir::create(out_dir).await?;
        let descriptor = BundleDescriptor::new(&self.config, &self.loaders, &built_at)
            .with_outfile(staging.path().join(file_name));

        let staged = self.run_staged(&staging, &descriptor, out_dir, artifact).await;
        staging.remove().await;
        let (report, committed) = staged?;

        for warning in &report.warnings {
            log::warn!("{warning}");
        }

        let finalized = finalize(&self.config, &self.version, &built_at).await?;

        Ok(BuildOutcome {
            artifact_path: artifact.to_path_buf(),
            manifest_path: finalized.manifest_path,
            manifest: finalized.manifest,
            manifest_json: finalized.manifest_json,
            committed,
            warnings: report.warnings,
        })
    }

    /// Runs the engine into `staging` and commits its outputs.
    async fn run_staged(
        &self,
        staging: &StagingDir,
        descriptor: &BundleDescriptor,
        out_dir: &Path,
        artifact: &Path,
    ) -> Result<(EngineReport, Vec<PathBuf>)> {
        let report = self.engine.run(descriptor).await?;

        let staged_artifact = &descriptor.outfile;
        if !tokio::fs::try_exists(staged_artifact).await.unwrap_or(false) {
            crate::bail!(
                "esbuild reported success but produced no {}",
                staged_artifact.display()
            );
        }

        let files = staging.files().await?;
        for file in files.iter().filter(|f| is_sourcemap(f)) {
            rebase_sourcemap_file(file).await?;
        }

        // Artifact last, so it never points at a map that is not there yet
        let mut plan: Vec<(&PathBuf, PathBuf)> = files
            .iter()
            .filter(|f| *f != staged_artifact)
            .filter_map(|f| f.file_name().map(|name| (f, out_dir.join(name))))
            .collect();
        plan.push((staged_artifact, artifact.to_path_buf()));

        // A directory in the way fails the build before any output is replaced
        let manifest = manifest_path(artifact);
        for target in plan.iter().map(|(_, t)| t).chain([&manifest]) {
            if is_dir(target).await {
                crate::bail!(
                    "cannot write {}: a directory is in the way",
                    target.display()
                );
            }
        }

        let mut committed = Vec::with_capacity(plan.len());
        for (file, target) in plan {
            replace_file(file, &target).await?;
            log::debug!("Committed {}", target.display());
            committed.push(target);
        }

        Ok((report, committed))
    }
}

async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .is_ok_and(|meta| meta.is_dir())
}

fn is_sourcemap(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "map")
}
