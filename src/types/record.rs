//! Convergence record type

/// One point on a convergence curve
///
/// Produced by the postpro extractor and never modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceRecord {
    /// Iteration index (directory suffix, or `len + 1` for a final record)
    pub iteration: u32,

    /// `Problem.DegreesOfFreedom` from palace.json
    pub dofs: u64,

    /// First value of the second line of error-indicators.csv
    pub error: f64,

    /// Set when the record comes from the root-level postpro files
    pub final_state: bool,
}

impl ConvergenceRecord {
    /// Create a per-iteration record
    pub fn new(iteration: u32, dofs: u64, error: f64) -> Self {
        Self {
            iteration,
            dofs,
            error,
            final_state: false,
        }
    }

    /// Create a record for the root-level (final) solution
    pub fn final_state(iteration: u32, dofs: u64, error: f64) -> Self {
        Self {
            iteration,
            dofs,
            error,
            final_state: true,
        }
    }

    /// Whether the point can be drawn on log-log axes
    pub fn is_log_plottable(&self) -> bool {
        self.dofs > 0 && self.error > 0.0 && self.error.is_finite()
    }
}
