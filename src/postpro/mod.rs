//! Palace postpro reader
//!
//! Walks a postpro directory and turns its `iterationN/` subdirectories into
//! an ordered sequence of convergence records.

pub mod palace;

pub use palace::{read_dofs, read_error_norm, ERROR_INDICATORS_CSV, PALACE_JSON};

use crate::errors::{ConvergenceError, Result};
use crate::types::ConvergenceRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix of per-iteration AMR output directories
pub const ITERATION_PREFIX: &str = "iteration";

/// An `iterationN` directory found under a postpro root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationDir {
    pub name: String,
    pub index: u32,
    pub path: PathBuf,
}

/// Why an iteration directory produced no record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingJson,
    MissingCsv,
    NoErrorRow,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::MissingJson => "no palace.json",
            SkipReason::MissingCsv => "no error-indicators.csv",
            SkipReason::NoErrorRow => "error-indicators.csv has no data row",
        }
    }
}

/// Records of one postpro directory, plus the iterations that were skipped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub records: Vec<ConvergenceRecord>,
    pub skipped: Vec<(String, SkipReason)>,
}

/// Parse `iterationN` into `N`
pub fn parse_iteration_name(name: &str) -> Option<u32> {
    name.strip_prefix(ITERATION_PREFIX)?.parse().ok()
}

/// List iteration directories, sorted by name
///
/// Ordering is lexical on the directory name, so `iteration10` comes before
/// `iteration2`.
pub fn iteration_dirs(root: &Path) -> Result<Vec<IterationDir>> {
    let entries = fs::read_dir(root).map_err(|e| ConvergenceError::io(root, e))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConvergenceError::io(root, e))?;
        let path = entry.path();
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        let Some(index) = parse_iteration_name(&name) else {
            continue;
        };
        if path.is_dir() {
            dirs.push(IterationDir { name, index, path });
        }
    }

    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(dirs)
}

/// Read both files of one output directory
///
/// `Ok(Err(reason))` means a file is missing or has no data row.
fn read_pair(dir: &Path) -> Result<std::result::Result<(u64, f64), SkipReason>> {
    let json = dir.join(PALACE_JSON);
    if !json.is_file() {
        return Ok(Err(SkipReason::MissingJson));
    }
    let dofs = read_dofs(&json)?;

    let csv = dir.join(ERROR_INDICATORS_CSV);
    if !csv.is_file() {
        return Ok(Err(SkipReason::MissingCsv));
    }

    match read_error_norm(&csv)? {
        Some(error) => Ok(Ok((dofs, error))),
        None => Ok(Err(SkipReason::NoErrorRow)),
    }
}

/// Extract convergence records and skip information from a postpro directory
pub fn extract(root: &Path) -> Result<Extraction> {
    let mut extraction = Extraction::default();

    for dir in iteration_dirs(root)? {
        match read_pair(&dir.path)? {
            Ok((dofs, error)) => extraction
                .records
                .push(ConvergenceRecord::new(dir.index, dofs, error)),
            Err(reason) => extraction.skipped.push((dir.name, reason)),
        }
    }

    // Root-level files hold the last refined solution. Both must exist.
    if root.join(PALACE_JSON).is_file() && root.join(ERROR_INDICATORS_CSV).is_file() {
        if let Ok((dofs, error)) = read_pair(root)? {
            let is_new = extraction
                .records
                .last()
                .map_or(true, |last| last.dofs != dofs);
            if is_new {
                let iteration = extraction.records.len() as u32 + 1;
                extraction
                    .records
                    .push(ConvergenceRecord::final_state(iteration, dofs, error));
            }
        }
    }

    Ok(extraction)
}

/// Read the convergence sequence of a postpro directory
pub fn read_convergence(root: &Path) -> Result<Vec<ConvergenceRecord>> {
    Ok(extract(root)?.records)
}
