//! esbuild process execution.

use super::descriptor::BundleDescriptor;
use super::diagnostics::{Diagnostic, Severity, parse_diagnostics};
use crate::bundler::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::Command;

/// Outcome of a successful engine run.
#[derive(Debug, Default)]
pub struct EngineReport {
    /// Non-fatal diagnostics, in the order reported
    pub warnings: Vec<Diagnostic>,
}

/// Handle on an esbuild executable.
#[derive(Debug, Clone)]
pub struct Esbuild {
    program: PathBuf,
}

impl Esbuild {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Path of the executable.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Runs one build and waits for it to finish.
    ///
    /// There is no timeout: the call returns once the engine has exited. A non-zero
    /// exit becomes [`Error::BundleFailed`] carrying every reported diagnostic.
    pub async fn run(&self, descriptor: &BundleDescriptor) -> Result<EngineReport> {
        let args = descriptor.to_args();
        log::debug!(
            "Running {} {}",
            self.program.display(),
            args.iter()
                .map(|a| a.to_string_lossy())
                .filter(|a| !a.starts_with("--banner:"))
                .collect::<Vec<_>>()
                .join(" ")
        );

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| Error::EngineSpawn {
                program: self.program.clone(),
                source,
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        // Drain both pipes concurrently so neither can fill up and stall the child
        let (_, stderr) = tokio::join!(
            async move {
                if let Some(stdout) = stdout {
                    let mut lines = BufReader::new(stdout).lines();
                    while let Ok(Some(line)) = lines.next_line().await {
                        log::debug!("esbuild: {line}");
                    }
                }
            },
            async move {
                let mut captured = String::new();
                if let Some(mut stderr) = stderr {
                    if let Err(e) = stderr.read_to_string(&mut captured).await {
                        log::warn!("Failed to read esbuild stderr: {e}");
                    }
                }
                captured
            }
        );

        let status = child.wait().await.map_err(|source| Error::EngineSpawn {
            program: self.program.clone(),
            source,
        })?;

        let mut diagnostics = parse_diagnostics(&stderr);

        if !status.success() {
            let has_error = diagnostics.iter().any(|d| d.severity == Severity::Error);
            if !has_error {
                // Engine died without a structured message; keep whatever it printed
                let raw = stderr.trim();
                let message = if raw.is_empty() {
                    "esbuild exited without reporting an error".to_string()
                } else {
                    raw.to_string()
                };
                diagnostics.push(Diagnostic::new(Severity::Error, message));
            }

            return Err(Error::BundleFailed {
                status: status.code(),
                diagnostics,
            });
        }

        diagnostics.retain(|d| d.severity == Severity::Warning);
        Ok(EngineReport {
            warnings: diagnostics,
        })
    }
}
