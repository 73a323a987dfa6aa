//! Configuration management for convergence-compare
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: `--config <FILE>`, else `<ROOT>/convergence.toml` if present.

use crate::errors::{ConvergenceError, Result};
use crate::types::{Dataset, Marker, SeriesColor, SeriesStyle};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Config file looked up in the root directory
pub const DEFAULT_CONFIG_FILE: &str = "convergence.toml";

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output image, relative to the root
    pub output: String,
    pub plot: PlotConfig,
    pub datasets: Vec<DatasetConfig>,
}

/// Figure configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

/// One dataset entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub label: String,
    /// Postpro directory, relative to the root
    pub directory: String,
    pub color: SeriesColor,
    pub marker: Marker,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: "convergence_comparison.png".to_string(),
            plot: PlotConfig::default(),
            datasets: vec![
                DatasetConfig {
                    label: "AMR only".to_string(),
                    directory: "postpro/amr_only".to_string(),
                    color: SeriesColor::Blue,
                    marker: Marker::Circle,
                },
                DatasetConfig {
                    label: "AMR + TMOP".to_string(),
                    directory: "postpro/tmop_test".to_string(),
                    color: SeriesColor::Red,
                    marker: Marker::Square,
                },
            ],
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width_in: 10.0,
            height_in: 6.0,
            dpi: 150,
            title: "AMR Convergence: With and Without TMOP Mesh Optimization".to_string(),
            x_label: "Degrees of Freedom".to_string(),
            y_label: "Error Indicator Norm".to_string(),
        }
    }
}

impl DatasetConfig {
    /// Build the dataset with its directory resolved against `root`
    pub fn to_dataset(&self, root: &Path) -> Dataset {
        Dataset::new(
            self.label.clone(),
            Config::resolve_path(&self.directory, root),
            SeriesStyle::new(self.color, self.marker),
        )
    }
}

impl Config {
    /// Load configuration from an explicit file, the root's default file, or built-in defaults
    pub fn load(path: Option<&Path>, root: &Path) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_from_file(config_path);
        }

        let default_path = root.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            return Self::load_from_file(&default_path);
        }

        Ok(Config::default())
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ConvergenceError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_toml(&contents)
    }

    /// Parse and validate a TOML document
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| ConvergenceError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.datasets.is_empty() {
            return Err(ConvergenceError::Config(
                "at least one dataset is required".to_string(),
            ));
        }

        let mut labels = HashSet::new();
        for dataset in &self.datasets {
            if dataset.label.trim().is_empty() {
                return Err(ConvergenceError::Config(
                    "dataset label must not be empty".to_string(),
                ));
            }
            if !labels.insert(dataset.label.as_str()) {
                return Err(ConvergenceError::Config(format!(
                    "duplicate dataset label: {}",
                    dataset.label
                )));
            }
        }

        if self.plot.dpi == 0 {
            return Err(ConvergenceError::Config(
                "dpi must be greater than 0".to_string(),
            ));
        }

        if !(self.plot.width_in > 0.0 && self.plot.height_in > 0.0) {
            return Err(ConvergenceError::Config(
                "figure width and height must be greater than 0".to_string(),
            ));
        }

        if self.output.trim().is_empty() {
            return Err(ConvergenceError::Config(
                "output path must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Datasets with directories resolved against `root`
    pub fn datasets(&self, root: &Path) -> Vec<Dataset> {
        self.datasets.iter().map(|d| d.to_dataset(root)).collect()
    }

    /// Output image path resolved against `root`
    pub fn output_path(&self, root: &Path) -> PathBuf {
        Self::resolve_path(&self.output, root)
    }

    /// Expand tilde in paths
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Expand tilde, then join relative paths onto `root`
    pub fn resolve_path(path: &str, root: &Path) -> PathBuf {
        let expanded = Self::expand_path(path);
        if expanded.is_absolute() {
            expanded
        } else {
            root.join(expanded)
        }
    }
}
