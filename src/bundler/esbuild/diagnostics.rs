//! Parsing of esbuild's human-readable diagnostics.
//!
//! With `--color=false` esbuild writes one block per message to stderr:
//!
//! ```text
//! ▲ [WARNING] Comparison using the "===" operator here is always false [equals-nan]
//!
//!     src/index.tsx:4:8:
//!       4 │ if (x === NaN) {}
//!         ╵         ~~~
//!
//! 1 warning
//! ```
//!
//! A header line opens a diagnostic, indented lines that follow belong to it, and
//! the trailing count summary is discarded.

use std::fmt;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Reported, build continues
    Warning,
    /// Fatal, build aborts
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("WARNING"),
            Severity::Error => f.write_str("ERROR"),
        }
    }
}

/// A single message reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Location and source excerpt lines, indentation preserved
    pub detail: Vec<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            detail: Vec::new(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)?;
        for line in &self.detail {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

/// Splits esbuild stderr output into diagnostics.
pub fn parse_diagnostics(stderr: &str) -> Vec<Diagnostic> {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    for line in stderr.lines() {
        if let Some((severity, message)) = parse_header(line) {
            diagnostics.push(Diagnostic::new(severity, message));
            continue;
        }

        let indented = line.starts_with(char::is_whitespace);
        if !indented || line.trim().is_empty() {
            continue;
        }

        if let Some(current) = diagnostics.last_mut() {
            current.detail.push(line.trim_end().to_string());
        }
    }

    diagnostics
}

/// Recognizes `✘ [ERROR] msg`, `▲ [WARNING] msg` and the marker-less forms.
fn parse_header(line: &str) -> Option<(Severity, &str)> {
    let mut body = line.trim_start();
    if let Some((marker, rest)) = body.split_once(' ') {
        if marker.chars().count() == 1 {
            body = rest;
        }
    }

    if let Some(message) = body.strip_prefix("[ERROR]") {
        Some((Severity::Error, message.trim()))
    } else if let Some(message) = body.strip_prefix("[WARNING]") {
        Some((Severity::Warning, message.trim()))
    } else {
        None
    }
}
