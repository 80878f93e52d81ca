//! Error types for the command line surface.
//!
//! This module defines the top-level error returned to `main`, with recovery
//! suggestions printed alongside the message.

use thiserror::Error;

/// Result type alias for top-level operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all form bundler operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Bundler errors
    #[error("Bundler error: {0}")]
    Bundler(#[from] crate::bundler::Error),

    /// Project file errors with their context chain
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use crate::bundler::Error as B;

        match self {
            BundlerError::Bundler(B::EngineNotFound { .. }) => vec![
                "Install esbuild in the project: npm install --save-dev esbuild".to_string(),
                "Or point at an executable with --esbuild <PATH> or FORM_BUNDLER_ESBUILD".to_string(),
            ],
            BundlerError::Bundler(B::BundleFailed { .. }) => vec![
                "Fix the errors reported above and re-run the build".to_string(),
                "Outputs from earlier builds were left unchanged".to_string(),
            ],
            BundlerError::Bundler(B::InvalidLoader { .. }) => vec![
                "Loader mappings look like .ext=loader, e.g. --loader .svg=dataurl".to_string(),
            ],
            BundlerError::Bundler(B::Fs { .. }) | BundlerError::Io(_) => vec![
                "Check that the output directory is writable".to_string(),
            ],
            BundlerError::Anyhow(_) => vec![
                "Check formpack.toml: only [form] version and [loaders] are recognized"
                    .to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
