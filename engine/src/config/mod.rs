pub mod settings;

pub use settings::{AnalyzerSettings, RowWidthPolicy};
