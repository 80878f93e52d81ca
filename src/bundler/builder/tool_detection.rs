//! esbuild executable discovery.
//!
//! Lookup order, first hit wins:
//! 1. an explicitly configured program (path or bare name)
//! 2. `node_modules/.bin/esbuild` under the working directory
//! 3. `esbuild` on `PATH`

use crate::bundler::error::{Error, Result};
use std::path::{Path, PathBuf};

#[cfg(windows)]
const LOCAL_BIN: &str = "node_modules/.bin/esbuild.cmd";
#[cfg(not(windows))]
const LOCAL_BIN: &str = "node_modules/.bin/esbuild";

/// Finds the esbuild executable to drive.
///
/// An explicit program that cannot be resolved is an error rather than a reason to
/// keep searching: the caller asked for that specific engine.
pub fn locate_esbuild(explicit: Option<&Path>, working_dir: &Path) -> Result<PathBuf> {
    if let Some(program) = explicit {
        return match which::which(program) {
            Ok(path) => {
                log::debug!("Using configured esbuild at {}", path.display());
                Ok(path)
            }
            Err(e) => {
                log::debug!("Configured esbuild {} not usable: {}", program.display(), e);
                Err(Error::EngineNotFound {
                    searched: vec![program.display().to_string()],
                })
            }
        };
    }

    let mut searched = Vec::new();

    let local = working_dir.join(LOCAL_BIN);
    match which::which(&local) {
        Ok(path) => {
            log::debug!("Found project-local esbuild at {}", path.display());
            return Ok(path);
        }
        Err(_) => searched.push(local.display().to_string()),
    }

    match which::which("esbuild") {
        Ok(path) => {
            log::debug!("Found esbuild on PATH at {}", path.display());
            Ok(path)
        }
        Err(e) => {
            log::debug!("esbuild not found in PATH: {}", e);
            searched.push("esbuild on PATH".to_string());
            Err(Error::EngineNotFound { searched })
        }
    }
}
