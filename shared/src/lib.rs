// Data model and cell-level parsing shared by the engine and any front-end
// that renders its output. No calculation logic lives here.

pub mod models;
pub mod utils;
