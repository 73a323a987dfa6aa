//! Command-line argument parsing for convergence-compare
//!
//! Every flag is optional; with none the tool reads `postpro/` under the
//! current directory and writes `convergence_comparison.png` there.

use clap::Parser;
use std::path::PathBuf;

/// convergence-compare - Plot AMR-only vs AMR+TMOP convergence from Palace output
#[derive(Parser, Debug)]
#[command(name = "convergence-compare")]
#[command(author = "Jerome (Kubashen) Naidoo")]
#[command(version)]
#[command(about = "Compare AMR-only and AMR+TMOP convergence from Palace postpro output", long_about = None)]
pub struct Args {
    /// Directory containing postpro/ (current directory by default)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Output image path (default: <ROOT>/convergence_comparison.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print tables only, do not render the chart
    #[arg(long)]
    pub no_plot: bool,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only warnings and errors)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Get root directory (current dir if not specified)
    pub fn root_dir(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        })
    }

    /// Reject contradictory flags
    pub fn validate(&self) -> Result<(), String> {
        if self.quiet && self.verbose > 0 {
            return Err("Cannot combine --quiet with --verbose.".to_string());
        }

        if self.no_plot && self.output.is_some() {
            return Err("--output has no effect with --no-plot.".to_string());
        }

        Ok(())
    }
}

impl Verbosity {
    /// Tables, progress and completion messages
    pub fn show_info(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Skipped iterations, observed rates, resolved paths
    pub fn show_details(&self) -> bool {
        matches!(self, Verbosity::Verbose | Verbosity::VeryVerbose)
    }

    /// Per-file reads
    pub fn show_trace(&self) -> bool {
        matches!(self, Verbosity::VeryVerbose)
    }
}
