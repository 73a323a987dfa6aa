//! Error types for convergence-compare
//!
//! Missing optional files are not errors: the extractor skips them. Everything
//! here is a malformed-input or I/O failure that terminates the run.

use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for reading, reporting and plotting convergence data
#[derive(Error, Debug)]
pub enum ConvergenceError {
    /// I/O errors, tagged with the path being accessed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unparseable palace.json or missing `Problem.DegreesOfFreedom`
    #[error("Invalid Palace JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Malformed error-indicators.csv
    #[error("Invalid CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Non-numeric error norm field
    #[error("Non-numeric error norm {value:?} in {}: {source}", path.display())]
    ParseFloat {
        path: PathBuf,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Chart rendering errors
    #[error("Plot error: {0}")]
    Plot(String),
}

impl ConvergenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvergenceError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for convergence operations
pub type Result<T> = std::result::Result<T, ConvergenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_names_path() {
        let err = ConvergenceError::io(
            "postpro/amr_only",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("postpro/amr_only"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_parse_float_error_display() {
        let source = "abc".parse::<f64>().unwrap_err();
        let err = ConvergenceError::ParseFloat {
            path: PathBuf::from("error-indicators.csv"),
            value: "abc".to_string(),
            source,
        };
        assert!(err.to_string().contains("\"abc\""));
        assert!(err.to_string().contains("error-indicators.csv"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConvergenceError::Config("dpi must be greater than 0".to_string());
        assert_eq!(err.to_string(), "Configuration error: dpi must be greater than 0");
    }
}
