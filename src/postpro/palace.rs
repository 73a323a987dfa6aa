//! Readers for the two Palace output files the comparison needs

use crate::errors::{ConvergenceError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Solver summary written by Palace
pub const PALACE_JSON: &str = "palace.json";

/// Error indicator table written by Palace
pub const ERROR_INDICATORS_CSV: &str = "error-indicators.csv";

/// The subset of palace.json we read
#[derive(Debug, Deserialize)]
struct PalaceSummary {
    #[serde(rename = "Problem")]
    problem: ProblemSection,
}

#[derive(Debug, Deserialize)]
struct ProblemSection {
    #[serde(rename = "DegreesOfFreedom")]
    degrees_of_freedom: u64,
}

/// Read `Problem.DegreesOfFreedom` from a palace.json file
pub fn read_dofs(path: &Path) -> Result<u64> {
    let contents = fs::read_to_string(path).map_err(|e| ConvergenceError::io(path, e))?;

    let summary: PalaceSummary =
        serde_json::from_str(&contents).map_err(|source| ConvergenceError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(summary.problem.degrees_of_freedom)
}

/// Read the error norm from an error-indicators.csv file
///
/// The first line is a header; the norm is the first field of the second
/// line. Returns `None` when there is no second line. Lines are counted
/// physically, so a blank second line is an empty (non-numeric) field.
pub fn read_error_norm(path: &Path) -> Result<Option<f64>> {
    let contents = fs::read_to_string(path).map_err(|e| ConvergenceError::io(path, e))?;

    let Some(line) = contents.lines().nth(1) else {
        return Ok(None);
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());

    let row = reader
        .records()
        .next()
        .transpose()
        .map_err(|source| ConvergenceError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let value = row.as_ref().and_then(|r| r.get(0)).unwrap_or_default();
    let norm = value
        .parse::<f64>()
        .map_err(|source| ConvergenceError::ParseFloat {
            path: path.to_path_buf(),
            value: value.to_string(),
            source,
        })?;

    Ok(Some(norm))
}
