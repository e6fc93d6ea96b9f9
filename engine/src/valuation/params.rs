// Turns the raw scenario form into typed parameters
use shared::models::{CashFlowParams, ScenarioDraft, ScenarioField};

use crate::error::EngineError;

/// Builds parameters from a draft once every field has been filled in.
///
/// Returns `None` while any field is blank. Rate fields are percent-scale
/// numbers; `years` must be an integer.
pub fn params_from_draft(draft: &ScenarioDraft) -> Option<Result<CashFlowParams, EngineError>> {
    if !draft.is_complete() {
        return None;
    }
    Some(build(draft))
}

fn build(draft: &ScenarioDraft) -> Result<CashFlowParams, EngineError> {
    Ok(CashFlowParams {
        current_cash_flow: decimal_field(draft, ScenarioField::CurrentCashFlow)?,
        growth_rate: decimal_field(draft, ScenarioField::GrowthRate)?,
        discount_rate: decimal_field(draft, ScenarioField::DiscountRate)?,
        terminal_growth_rate: decimal_field(draft, ScenarioField::TerminalGrowthRate)?,
        market_cap: decimal_field(draft, ScenarioField::MarketCap)?,
        years: years_field(draft)?,
    })
}

fn decimal_field(draft: &ScenarioDraft, field: ScenarioField) -> Result<f64, EngineError> {
    let raw = draft.get(field).trim();
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| EngineError::InvalidParameter {
            field: field.key().to_string(),
            value: raw.to_string(),
        })
}

fn years_field(draft: &ScenarioDraft) -> Result<i32, EngineError> {
    let raw = draft.get(ScenarioField::Years).trim();
    raw.parse::<i32>()
        .map_err(|_| EngineError::InvalidHorizon(format!("years must be an integer, got '{}'", raw)))
}
