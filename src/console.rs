//! Console output for the comparison run
//!
//! All user-facing text goes through [`Console`]. In terminal mode it is
//! printed (colored where it helps); in captured mode it is kept in memory so
//! the driver's output can be inspected.

use crate::cli::Verbosity;
use colored::Colorize;
use std::cell::RefCell;

/// Where console output goes
#[derive(Debug)]
pub enum ConsoleMode {
    /// Direct stdout/stderr output
    Terminal,

    /// Plain lines kept in memory
    Captured(RefCell<Vec<String>>),
}

/// Verbosity-aware printer
#[derive(Debug)]
pub struct Console {
    mode: ConsoleMode,
    verbosity: Verbosity,
}

impl Console {
    /// Console printing to the terminal
    pub fn terminal(verbosity: Verbosity) -> Self {
        Self {
            mode: ConsoleMode::Terminal,
            verbosity,
        }
    }

    /// Console recording output instead of printing it
    pub fn captured(verbosity: Verbosity) -> Self {
        Self {
            mode: ConsoleMode::Captured(RefCell::new(Vec::new())),
            verbosity,
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn emit(&self, plain: &str, styled: impl FnOnce() -> String, to_stderr: bool) {
        match &self.mode {
            ConsoleMode::Terminal => {
                if to_stderr {
                    eprintln!("{}", styled());
                } else {
                    println!("{}", styled());
                }
            }
            ConsoleMode::Captured(lines) => {
                lines
                    .borrow_mut()
                    .extend(plain.split('\n').map(str::to_owned));
            }
        }
    }

    /// Show an informational message
    pub fn info(&self, message: &str) {
        if self.verbosity.show_info() {
            self.emit(message, || message.to_string(), false);
        }
    }

    /// Show a pre-formatted table
    pub fn table(&self, text: &str) {
        if self.verbosity.show_info() {
            self.emit(text, || text.to_string(), false);
        }
    }

    /// Show a message only in verbose mode
    pub fn detail(&self, message: &str) {
        if self.verbosity.show_details() {
            self.emit(message, || message.dimmed().to_string(), false);
        }
    }

    /// Show a success message
    pub fn success(&self, message: &str) {
        if self.verbosity.show_info() {
            self.emit(message, || message.green().to_string(), false);
        }
    }

    /// Show a warning message, regardless of verbosity
    pub fn warning(&self, message: &str) {
        let line = format!("Warning: {}", message);
        self.emit(&line, || line.yellow().to_string(), false);
    }

    /// Show an error message, regardless of verbosity
    pub fn error(&self, message: &str) {
        let line = format!("Error: {}", message);
        self.emit(&line, || line.red().bold().to_string(), true);
    }

    /// Lines recorded so far (empty in terminal mode)
    pub fn lines(&self) -> Vec<String> {
        match &self.mode {
            ConsoleMode::Terminal => Vec::new(),
            ConsoleMode::Captured(lines) => lines.borrow().clone(),
        }
    }

    /// Recorded output joined with newlines
    pub fn output(&self) -> String {
        self.lines().join("\n")
    }

    pub fn is_captured(&self) -> bool {
        matches!(self.mode, ConsoleMode::Captured(_))
    }
}
