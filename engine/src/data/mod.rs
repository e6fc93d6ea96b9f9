pub mod csv_parser;
pub mod session;

pub use csv_parser::TableParser;
pub use session::AnalysisSession;
