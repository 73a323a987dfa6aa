//! Convergence analysis
//! Provides the observed rate of a convergence sequence

pub mod convergence;

pub use convergence::{fit_rate, observed_rate, RateFit};
