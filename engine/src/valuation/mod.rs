// Valuation calculations: DCF projection and trailing-window CAGR.
pub mod cagr;
pub mod dcf;
pub mod params;

pub use cagr::{cagr, Cagr};
pub use dcf::dcf;
pub use params::params_from_draft;

use serde_json::Value;

/// Trailing windows reported for every line item.
pub const STANDARD_CAGR_WINDOWS: [usize; 4] = [5, 10, 15, 20];

// Common trait for statistics computed over a row's raw cells
pub trait SeriesIndicator: Send + Sync {
    fn name(&self) -> &str;
    fn parameters(&self) -> Value;
    fn calculate(&self, series: &[String]) -> Option<f64>; // None when the statistic is undefined for this series
}
