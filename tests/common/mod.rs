//! Helpers for building Palace postpro trees on disk

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub fn write_json(dir: &Path, dofs: u64) {
    fs::create_dir_all(dir).unwrap();
    let json = format!(
        r#"{{"Problem": {{"MPISize": 1, "DegreesOfFreedom": {}}}, "ElapsedTime": {{}}}}"#,
        dofs
    );
    fs::write(dir.join("palace.json"), json).unwrap();
}

pub fn write_csv(dir: &Path, lines: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    let mut contents = lines.join("\n");
    contents.push('\n');
    fs::write(dir.join("error-indicators.csv"), contents).unwrap();
}

pub fn write_error(dir: &Path, error: f64) {
    let row = format!("{:e},{:e},{:e},{:e}", error, error * 1e-3, error * 0.1, error * 1e-2);
    write_csv(dir, &["Norm,Minimum,Maximum,Mean", &row]);
}

/// iterationN/ with both files
pub fn write_iteration(root: &Path, n: u32, dofs: u64, error: f64) -> PathBuf {
    let dir = root.join(format!("iteration{}", n));
    write_json(&dir, dofs);
    write_error(&dir, error);
    dir
}
