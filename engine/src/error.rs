use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    // Rows whose shape does not line up with the header row.
    #[error("Table structure error: {0}")]
    TableStructure(String),

    #[error("Invalid value '{value}' for {field}")]
    InvalidParameter { field: String, value: String },

    #[error("Invalid projection horizon: {0}")]
    InvalidHorizon(String),

    // r == g makes the perpetuity denominator zero.
    #[error(
        "Terminal value is undefined: discount rate ({discount_rate}%) equals terminal growth rate ({terminal_growth_rate}%)"
    )]
    DegenerateTerminalValue {
        discount_rate: f64,
        terminal_growth_rate: f64,
    },
}

impl EngineError {
    /// Errors caused by the caller's scenario rather than by input files.
    pub fn is_scenario_error(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidParameter { .. }
                | EngineError::InvalidHorizon(_)
                | EngineError::DegenerateTerminalValue { .. }
        )
    }
}
