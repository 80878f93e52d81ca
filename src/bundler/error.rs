//! Error types for the bundling pipeline.
//!
//! Every failure inside [`crate::bundler`] is expressed as an [`Error`]. Filesystem
//! failures carry the operation and path that failed, and engine failures carry
//! every diagnostic the engine reported so the operator sees the full picture.

use super::esbuild::{Diagnostic, Severity};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for bundling operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while resolving, bundling or finalizing a form.
#[derive(Error, Debug)]
pub enum Error {
    /// Bare I/O error without further context
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    /// I/O error annotated with the operation and path
    #[error("{context} {}: {source}", path.display())]
    Fs {
        /// What the pipeline was doing
        context: &'static str,
        /// Path the operation touched
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No usable esbuild executable could be found
    #[error("esbuild executable not found (searched: {})", searched.join(", "))]
    EngineNotFound {
        /// Every location that was tried, in order
        searched: Vec<String>,
    },

    /// The esbuild process could not be started or awaited
    #[error("failed to run {}: {source}", program.display())]
    EngineSpawn {
        /// Program that was executed
        program: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// esbuild reported a fatal error
    #[error("{}", render_failure(.status, .diagnostics))]
    BundleFailed {
        /// Exit code of the engine, if it exited normally
        status: Option<i32>,
        /// All diagnostics reported during the failed run
        diagnostics: Vec<Diagnostic>,
    },

    /// A loader mapping could not be parsed
    #[error("invalid loader mapping `{spec}`: {reason}")]
    InvalidLoader {
        /// The offending mapping as written
        spec: String,
        /// Why it was rejected
        reason: String,
    },

    /// Anything else
    #[error("{0}")]
    GenericError(String),
}

fn render_failure(status: &Option<i32>, diagnostics: &[Diagnostic]) -> String {
    let exit = match status {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    };
    let errors = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();

    let mut out = format!("esbuild failed ({exit}) with {errors} error(s)");
    for diagnostic in diagnostics {
        out.push('\n');
        out.push_str(&diagnostic.to_string());
    }
    out
}

/// Attaches an operation description and path to I/O errors.
pub trait ErrorExt<T> {
    /// Converts the error into [`Error::Fs`].
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Converts missing values and foreign errors into [`Error::GenericError`].
pub trait Context<T> {
    /// Wraps the failure with a message.
    fn context<C: Display>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

impl<T, E: std::error::Error> Context<T> for std::result::Result<T, E> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{context}: {e}")))
    }
}

/// Returns early with a formatted [`Error::GenericError`].
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)).into())
    };
}
