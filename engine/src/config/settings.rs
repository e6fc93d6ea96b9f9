// Analyzer settings, loaded from a JSON file or taken from defaults.
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::EngineError;
use crate::valuation::STANDARD_CAGR_WINDOWS;

/// What the table parser does with a row whose value count differs from the header count.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RowWidthPolicy {
    #[default]
    Reject,
    PassThrough,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AnalyzerSettings {
    pub cagr_windows: Vec<usize>,
    pub row_width_policy: RowWidthPolicy,
    pub value_unit: String,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        AnalyzerSettings {
            cagr_windows: STANDARD_CAGR_WINDOWS.to_vec(),
            row_width_policy: RowWidthPolicy::Reject,
            value_unit: "billions".to_string(),
        }
    }
}

impl AnalyzerSettings {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let settings: AnalyzerSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, EngineError> {
        let json = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loaded analyzer settings file");
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), EngineError> {
        if self.cagr_windows.iter().any(|&w| w == 0) {
            return Err(EngineError::ConfigError(
                "cagr_windows entries must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
