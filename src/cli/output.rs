//! Console output for hookmaster
//!
//! Human-readable progress lines, one symbol per kind of line. None of this
//! is a machine-readable contract; `ls --json` exists for that.

use console::{StyledObject, style};

/// Prints status lines, honoring `--verbose` and `--quiet`
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Status line on stdout, suppressed by `--quiet`
    fn line(&self, symbol: StyledObject<&str>, message: impl std::fmt::Display) {
        if !self.quiet {
            println!("{symbol} {message}");
        }
    }

    pub fn success(&self, message: &str) {
        self.line(style("✔").green(), message);
    }

    /// Goes to stderr and ignores `--quiet`
    pub fn error(&self, message: &str) {
        eprintln!("{} {message}", style("✖").red());
    }

    pub fn warning(&self, message: &str) {
        self.line(style("⚠").yellow(), message);
    }

    pub fn info(&self, message: &str) {
        self.line(style("ℹ").blue(), message);
    }

    /// Detail only shown with `--verbose`
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            self.line(style("ℹ").dim(), style(message).dim());
        }
    }

    /// One hook file written or removed
    pub fn step(&self, step: &str) {
        self.line(style("❯").cyan(), step);
    }

    /// A hook file's name and full contents. This is the result of `ls`, so
    /// `--quiet` does not hide it.
    pub fn file(&self, name: &str, content: &str) {
        println!("{}", style(name).bold().cyan());
        print!("{content}");
        if !content.is_empty() && !content.ends_with('\n') {
            println!();
        }
    }
}
