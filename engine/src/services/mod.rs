pub mod analysis;

pub use analysis::{analyze_table, format_cagr, percentage_difference, projection_chart, summarize_valuation};
