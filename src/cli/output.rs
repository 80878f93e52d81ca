//! Colored terminal output.
//!
//! Status lines go to stderr so stdout carries only the manifest, which keeps the
//! tool pipeable: `form_bundler src/index.tsx dist/x.js my-form | jq .sizeBytes`.

use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes user-facing status lines.
///
/// `quiet` silences progress, success and detail lines. Warnings and errors are
/// always written.
#[derive(Debug, Clone)]
pub struct OutputManager {
    quiet: bool,
}

impl OutputManager {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    fn stderr() -> StandardStream {
        let choice = if io::stderr().is_terminal() {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        StandardStream::stderr(choice)
    }

    fn tagged(&self, color: Color, tag: &str, message: &str) -> io::Result<()> {
        let stream = Self::stderr();
        let mut out = stream.lock();
        out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(out, "{tag}")?;
        out.reset()?;
        writeln!(out, " {message}")
    }

    fn plain(&self, message: &str) -> io::Result<()> {
        let stream = Self::stderr();
        let mut out = stream.lock();
        writeln!(out, "{message}")
    }

    /// Indented detail line, hidden in quiet mode
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.quiet {
            self.plain(&format!("  {message}"))
        } else {
            Ok(())
        }
    }

    pub fn progress(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.tagged(Color::Cyan, "→", message)
    }

    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.tagged(Color::Green, "✓", message)
    }

    pub fn warn(&self, message: &str) -> io::Result<()> {
        self.tagged(Color::Yellow, "warning:", message)
    }

    pub fn error(&self, message: &str) -> io::Result<()> {
        self.tagged(Color::Red, "error:", message)
    }

    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let stream = Self::stderr();
        let mut out = stream.lock();
        out.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(out, "{title}")?;
        out.reset()
    }

    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.plain(&format!("  {message}"))
    }

    /// Writes machine-readable output to stdout, regardless of quiet mode.
    pub fn emit(&self, text: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}
