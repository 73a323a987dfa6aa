//! Observed convergence rate of an error-vs-DOFs sequence

use crate::types::ConvergenceRecord;

/// Straight-line fit in log-log space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateFit {
    /// d ln(error) / d ln(dofs); negative when the error decreases
    pub slope: f64,

    /// Number of points used
    pub points: usize,
}

/// Fit the records that can be shown on log-log axes
///
/// Returns `None` with fewer than two usable points or when every point has
/// the same DOF count.
pub fn fit_rate(records: &[ConvergenceRecord]) -> Option<RateFit> {
    let points: Vec<(f64, f64)> = records
        .iter()
        .filter(|r| r.is_log_plottable())
        .map(|r| ((r.dofs as f64).ln(), r.error.ln()))
        .collect();

    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let sxx: f64 = points.iter().map(|(x, _)| (x - mean_x).powi(2)).sum();
    if sxx <= f64::EPSILON {
        return None;
    }
    let sxy: f64 = points
        .iter()
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();

    Some(RateFit {
        slope: sxy / sxx,
        points: points.len(),
    })
}

/// Slope of the log-log fit, if one exists
pub fn observed_rate(records: &[ConvergenceRecord]) -> Option<f64> {
    fit_rate(records).map(|fit| fit.slope)
}
