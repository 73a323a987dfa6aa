//! convergence-compare - Palace AMR convergence comparison
//!
//! Reads per-iteration Palace postpro output for an AMR-only run and an
//! AMR + TMOP run, prints error-vs-DOFs tables and renders a log-log chart.
//!
//! # Architecture
//!
//! - **postpro**: directory walk and palace.json / error-indicators.csv readers
//! - **report**: fixed-width tables
//! - **plot**: log-log chart
//! - **execution**: the driver tying them together

pub mod errors;
pub mod types;

// Re-export commonly used types
pub use errors::{ConvergenceError, Result};

pub mod postpro;
pub mod analysis;
pub mod report;
pub mod plot;

// Command line, configuration and console output
pub mod cli;
pub mod console;
pub use console::Console;

// Shared run logic for the binary and tests
pub mod execution;
