//! Comparison run: scan → extract → print tables → render chart
//!
//! This module holds the top-level driver used by `main.rs`. It owns the
//! "no data" guard; the plotter never sees a run with nothing to draw.

use crate::cli::Config;
use crate::console::Console;
use crate::errors::Result;
use crate::plot::{plot_comparison, PlotOptions, PlotSeries};
use crate::postpro;
use crate::report::print_table;
use crate::types::{ConvergenceRecord, Dataset};
use std::path::{Path, PathBuf};

/// Everything a run needs, with paths already resolved
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub datasets: Vec<Dataset>,
    pub output: PathBuf,
    pub plot: PlotOptions,
    pub plot_enabled: bool,
}

impl RunSettings {
    /// Resolve a configuration against a root directory
    pub fn from_config(config: &Config, root: &Path) -> Self {
        Self {
            datasets: config.datasets(root),
            output: config.output_path(root),
            plot: PlotOptions::from(&config.plot),
            plot_enabled: true,
        }
    }

    /// Built-in AMR-only / AMR+TMOP comparison under `root`
    pub fn defaults(root: &Path) -> Self {
        Self::from_config(&Config::default(), root)
    }

    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = output;
        self
    }

    pub fn without_plot(mut self) -> Self {
        self.plot_enabled = false;
        self
    }
}

/// Records read for one dataset
#[derive(Debug, Clone)]
pub struct DatasetResult {
    pub dataset: Dataset,
    pub records: Vec<ConvergenceRecord>,
    /// Whether the dataset directory existed
    pub found: bool,
}

/// Outcome of a comparison run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub results: Vec<DatasetResult>,
    /// Image written, if any
    pub output: Option<PathBuf>,
}

impl RunSummary {
    pub fn has_data(&self) -> bool {
        self.results.iter().any(|r| !r.records.is_empty())
    }

    /// Records of the dataset with the given label
    pub fn records(&self, label: &str) -> Option<&[ConvergenceRecord]> {
        self.results
            .iter()
            .find(|r| r.dataset.label == label)
            .map(|r| r.records.as_slice())
    }
}

/// Read one dataset and print its table
fn collect_dataset(dataset: &Dataset, console: &Console) -> Result<DatasetResult> {
    if !dataset.directory.exists() {
        console.warning(&format!(
            "{} directory not found: {}",
            dataset.label,
            dataset.directory.display()
        ));
        return Ok(DatasetResult {
            dataset: dataset.clone(),
            records: Vec::new(),
            found: false,
        });
    }

    if console.verbosity().show_trace() {
        console.detail(&format!("Reading {}", dataset.directory.display()));
    }

    let extraction = postpro::extract(&dataset.directory)?;
    for (name, reason) in &extraction.skipped {
        console.detail(&format!("Skipped {}/{}: {}", dataset.label, name, reason.as_str()));
    }

    print_table(console, &dataset.label, &extraction.records);

    Ok(DatasetResult {
        dataset: dataset.clone(),
        records: extraction.records,
        found: true,
    })
}

/// Run the comparison
///
/// Missing dataset directories are reported and treated as empty. Malformed
/// Palace output aborts the run with an error.
pub fn run(settings: &RunSettings, console: &Console) -> Result<RunSummary> {
    let mut results = Vec::with_capacity(settings.datasets.len());
    for dataset in &settings.datasets {
        results.push(collect_dataset(dataset, console)?);
    }

    let mut summary = RunSummary {
        results,
        output: None,
    };

    if !summary.has_data() {
        console.info("\nNo data found to plot.");
        return Ok(summary);
    }

    if settings.plot_enabled {
        let series: Vec<PlotSeries<'_>> = summary
            .results
            .iter()
            .map(|r| PlotSeries::new(&r.dataset, &r.records))
            .collect();

        plot_comparison(&series, &settings.output, &settings.plot, console)?;
        summary.output = Some(settings.output.clone());
    }

    console.success("\nComparison complete!");
    Ok(summary)
}
