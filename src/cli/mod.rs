//! Command line interface for the form bundler.
//!
//! [`run`] is the single boundary where every fatal condition ends up; `main`
//! turns its error into a non-zero exit status.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::bundler::{Bundler, Esbuild, LoaderMap, locate_esbuild, resolve_version};
use crate::error::{CliError, Result};
use crate::metadata::{PROJECT_FILE, load_project_config};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    let runtime_config = RuntimeConfig::from(&args);
    execute(&args, &runtime_config).await
}

/// Runs one build for already-parsed arguments.
pub async fn execute(args: &Args, runtime_config: &RuntimeConfig) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    // Configuration Resolver
    let builder = args.settings_builder();
    for field in builder.defaulted() {
        log::info!("No {} given, using default {}", field, field.default_value());
        runtime_config.verbose_println(&format!(
            "Using default {}: {}",
            field,
            field.default_value()
        ))?;
    }
    let config = builder.build();

    let working_dir = std::env::current_dir()?;
    let project_path = args
        .config
        .clone()
        .unwrap_or_else(|| working_dir.join(PROJECT_FILE));
    let project = load_project_config(&project_path, args.config.is_some())?;

    let mut loaders = LoaderMap::default();
    loaders.extend_from_names(&project.loaders)?;
    for (extension, loader) in &args.loaders {
        loaders.insert(extension, *loader)?;
    }

    let version = resolve_version(
        args.form_version.as_deref(),
        project.form.version.as_deref(),
    );

    let program = locate_esbuild(args.esbuild.as_deref(), &working_dir)?;

    runtime_config.section(&format!("Building form {}", config.artifact_name()))?;
    runtime_config.verbose_println(&format!("esbuild: {}", program.display()))?;
    runtime_config.verbose_println(&format!("version: {version}"))?;
    runtime_config.progress(&format!(
        "Bundling {} → {}",
        config.entry_point().display(),
        config.output_path().display()
    ))?;

    let outcome = Bundler::new(config, Esbuild::new(program))
        .loaders(loaders)
        .version(version)
        .build()
        .await?;

    // Outputs are committed from here on; a closed terminal or pipe must not
    // turn the build into a failure
    for warning in &outcome.warnings {
        after_commit(runtime_config.warn(&warning.to_string()));
    }

    after_commit(runtime_config.success(&format!(
        "Built {} ({} bytes)",
        outcome.artifact_path.display(),
        outcome.manifest.size_bytes
    )));
    for path in outcome
        .committed
        .iter()
        .filter(|p| **p != outcome.artifact_path)
    {
        after_commit(runtime_config.indent(&format!("+ {}", path.display())));
    }
    after_commit(runtime_config.indent(&format!("+ {}", outcome.manifest_path.display())));

    after_commit(runtime_config.output().emit(&outcome.manifest_json));

    Ok(0)
}

fn after_commit(result: std::io::Result<()>) {
    if let Err(e) = result {
        log::warn!("Could not report build result: {e}");
    }
}
