//! Postpro extraction tests
//!
//! Builds Palace output trees in temporary directories and checks the records
//! read back from them.

mod common;

use common::{write_csv, write_error, write_iteration, write_json};
use convergence_compare::postpro::{extract, iteration_dirs, read_convergence, SkipReason};
use convergence_compare::types::ConvergenceRecord;
use convergence_compare::ConvergenceError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_single_iteration() {
    let dir = TempDir::new().unwrap();
    let iter = dir.path().join("iteration1");
    write_json(&iter, 1000);
    write_csv(&iter, &["header", "1.5e-3"]);

    let records = read_convergence(dir.path()).unwrap();
    assert_eq!(records, vec![ConvergenceRecord::new(1, 1000, 0.0015)]);
}

#[test]
fn test_well_formed_iterations_in_order() {
    let dir = TempDir::new().unwrap();
    let dofs = [1200u64, 2400, 5100, 9800];
    for (i, &d) in dofs.iter().enumerate() {
        write_iteration(dir.path(), i as u32 + 1, d, 1.0 / d as f64);
    }

    let records = read_convergence(dir.path()).unwrap();
    assert_eq!(records.len(), 4);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.iteration, i as u32 + 1);
        assert_eq!(record.dofs, dofs[i]);
        assert!(!record.final_state);
    }
}

#[test]
fn test_missing_json_skips_iteration() {
    let dir = TempDir::new().unwrap();
    write_iteration(dir.path(), 1, 1000, 1e-2);
    write_error(&dir.path().join("iteration2"), 5e-3);
    write_iteration(dir.path(), 3, 4000, 2e-3);

    let extraction = extract(dir.path()).unwrap();
    let iterations: Vec<u32> = extraction.records.iter().map(|r| r.iteration).collect();
    assert_eq!(iterations, vec![1, 3]);
    assert_eq!(
        extraction.skipped,
        vec![("iteration2".to_string(), SkipReason::MissingJson)]
    );
}

#[test]
fn test_missing_csv_skips_iteration() {
    let dir = TempDir::new().unwrap();
    write_iteration(dir.path(), 1, 1000, 1e-2);
    write_json(&dir.path().join("iteration2"), 2000);

    let extraction = extract(dir.path()).unwrap();
    assert_eq!(extraction.records.len(), 1);
    assert_eq!(
        extraction.skipped,
        vec![("iteration2".to_string(), SkipReason::MissingCsv)]
    );
}

#[test]
fn test_header_only_csv_skips_iteration() {
    let dir = TempDir::new().unwrap();
    let iter = dir.path().join("iteration1");
    write_json(&iter, 1000);
    write_csv(&iter, &["Norm,Minimum,Maximum,Mean"]);

    let extraction = extract(dir.path()).unwrap();
    assert!(extraction.records.is_empty());
    assert_eq!(extraction.skipped[0].1, SkipReason::NoErrorRow);
}

#[test]
fn test_error_norm_is_read_from_second_physical_line() {
    let dir = TempDir::new().unwrap();
    let iter = dir.path().join("iteration1");
    write_json(&iter, 1000);
    write_csv(&iter, &["", "1.5e-3"]);

    let records = read_convergence(dir.path()).unwrap();
    assert_eq!(records, vec![ConvergenceRecord::new(1, 1000, 1.5e-3)]);
}

#[test]
fn test_blank_second_line_propagates() {
    let dir = TempDir::new().unwrap();
    let iter = dir.path().join("iteration1");
    write_json(&iter, 1000);
    write_csv(&iter, &["Norm", "", "7.0e-3"]);

    assert!(matches!(
        read_convergence(dir.path()),
        Err(ConvergenceError::ParseFloat { .. })
    ));
}

#[test]
fn test_root_pair_with_same_dofs_is_not_appended() {
    let dir = TempDir::new().unwrap();
    write_iteration(dir.path(), 1, 1000, 1e-2);
    write_iteration(dir.path(), 2, 2000, 5e-3);
    write_json(dir.path(), 2000);
    write_error(dir.path(), 5e-3);

    let records = read_convergence(dir.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| !r.final_state));
}

#[test]
fn test_root_pair_with_new_dofs_is_appended() {
    let dir = TempDir::new().unwrap();
    write_iteration(dir.path(), 1, 1000, 1e-2);
    write_iteration(dir.path(), 2, 2000, 5e-3);
    write_json(dir.path(), 4100);
    write_csv(dir.path(), &["Norm", "2.5e-3"]);

    let records = read_convergence(dir.path()).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[2], ConvergenceRecord::final_state(3, 4100, 2.5e-3));
}

#[test]
fn test_root_pair_only() {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), 800);
    write_error(dir.path(), 4e-2);

    let records = read_convergence(dir.path()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].iteration, 1);
    assert!(records[0].final_state);
}

#[test]
fn test_root_json_without_csv_is_ignored() {
    let dir = TempDir::new().unwrap();
    write_iteration(dir.path(), 1, 1000, 1e-2);
    fs::write(dir.path().join("palace.json"), "{broken").unwrap();

    let records = read_convergence(dir.path()).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_root_csv_without_data_row_is_ignored() {
    let dir = TempDir::new().unwrap();
    write_iteration(dir.path(), 1, 1000, 1e-2);
    write_json(dir.path(), 3000);
    write_csv(dir.path(), &["Norm,Minimum"]);

    let records = read_convergence(dir.path()).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_lexical_directory_order() {
    let dir = TempDir::new().unwrap();
    write_iteration(dir.path(), 1, 100, 1e-1);
    write_iteration(dir.path(), 2, 200, 5e-2);
    write_iteration(dir.path(), 10, 1000, 1e-2);

    let names: Vec<String> = iteration_dirs(dir.path())
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["iteration1", "iteration10", "iteration2"]);

    let iterations: Vec<u32> = read_convergence(dir.path())
        .unwrap()
        .iter()
        .map(|r| r.iteration)
        .collect();
    assert_eq!(iterations, vec![1, 10, 2]);
}

#[test]
fn test_non_iteration_entries_are_ignored() {
    let dir = TempDir::new().unwrap();
    write_iteration(dir.path(), 1, 100, 1e-1);
    fs::create_dir_all(dir.path().join("paraview")).unwrap();
    fs::create_dir_all(dir.path().join("iteration_old")).unwrap();
    fs::write(dir.path().join("iteration2"), "not a directory").unwrap();

    let dirs = iteration_dirs(dir.path()).unwrap();
    assert_eq!(dirs.len(), 1);
    assert_eq!(dirs[0].index, 1);
}

#[test]
fn test_empty_directory() {
    let dir = TempDir::new().unwrap();
    assert!(read_convergence(dir.path()).unwrap().is_empty());
}

#[test]
fn test_malformed_json_propagates() {
    let dir = TempDir::new().unwrap();
    let iter = dir.path().join("iteration1");
    fs::create_dir_all(&iter).unwrap();
    fs::write(iter.join("palace.json"), "{\"Problem\": ").unwrap();
    write_error(&iter, 1e-2);

    assert!(matches!(
        read_convergence(dir.path()),
        Err(ConvergenceError::Json { .. })
    ));
}

#[test]
fn test_non_numeric_error_propagates() {
    let dir = TempDir::new().unwrap();
    let iter = dir.path().join("iteration1");
    write_json(&iter, 1000);
    write_csv(&iter, &["Norm", "not-a-number"]);

    assert!(matches!(
        read_convergence(dir.path()),
        Err(ConvergenceError::ParseFloat { .. })
    ));
}

#[test]
fn test_missing_root_directory_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("postpro").join("amr_only");
    assert!(matches!(
        read_convergence(&missing),
        Err(ConvergenceError::Io { .. })
    ));
}
