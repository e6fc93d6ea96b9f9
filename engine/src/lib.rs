// Engine library root
// Table parsing, DCF/CAGR calculations and the services that combine them.

pub mod config;
pub mod data;
pub mod error;
pub mod services;
pub mod valuation;

pub use error::EngineError;
