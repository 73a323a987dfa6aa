//! Type definitions module
//!
//! Records produced by the extractor and the datasets they come from.

pub mod record;
pub mod dataset;

// Re-export commonly used types
pub use record::ConvergenceRecord;
pub use dataset::{Dataset, Marker, SeriesColor, SeriesStyle};
