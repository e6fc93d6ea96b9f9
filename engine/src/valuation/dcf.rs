// Discounted cash flow projection with a perpetuity-growth terminal value
use shared::models::{CashFlowParams, DcfResult};

use crate::error::EngineError;

/// Projects `params.years` of cash flow and discounts it to present value.
///
/// Growth compounds from year 1, so the first projected value is
/// `current_cash_flow * (1 + g)`. Each year is discounted by `(1 + r)^year`
/// and the terminal value by `(1 + r)^years`.
///
/// Equal discount and terminal growth rates fail before any other field is checked.
pub fn dcf(params: &CashFlowParams) -> Result<DcfResult, EngineError> {
    let growth = params.growth_rate / 100.0;
    let discount = params.discount_rate / 100.0;
    let terminal_growth = params.terminal_growth_rate / 100.0;

    // NaN never compares equal, so non-finite rates fall through to validate.
    if discount == terminal_growth {
        return Err(EngineError::DegenerateTerminalValue {
            discount_rate: params.discount_rate,
            terminal_growth_rate: params.terminal_growth_rate,
        });
    }

    validate(params)?;

    let years = params.years as usize;
    let mut projected_cash_flows = Vec::with_capacity(years);
    let mut discounted_cash_flows = Vec::with_capacity(years);
    let mut projected_total = 0.0;
    let mut discounted_total = 0.0;

    let mut cash_flow = params.current_cash_flow;
    for year in 1..=params.years {
        cash_flow *= 1.0 + growth;
        let discounted = cash_flow / (1.0 + discount).powi(year);

        projected_cash_flows.push(cash_flow);
        discounted_cash_flows.push(discounted);
        projected_total += cash_flow;
        discounted_total += discounted;
    }

    // years >= 1 was checked above
    let last_year_cash_flow = cash_flow;
    let terminal_value = last_year_cash_flow * (1.0 + terminal_growth) / (discount - terminal_growth);
    let discounted_terminal_value = terminal_value / (1.0 + discount).powi(params.years);
    let total_present_value = discounted_terminal_value + discounted_total;

    tracing::debug!(
        years = params.years,
        terminal_value,
        total_present_value,
        "Computed DCF projection"
    );

    Ok(DcfResult {
        projected_cash_flows,
        discounted_cash_flows,
        projected_total,
        discounted_total,
        terminal_value,
        discounted_terminal_value,
        total_present_value,
    })
}

fn validate(params: &CashFlowParams) -> Result<(), EngineError> {
    if params.years <= 0 {
        return Err(EngineError::InvalidHorizon(format!(
            "years must be a positive integer, got {}",
            params.years
        )));
    }

    let scalars = [
        ("currentCashFlow", params.current_cash_flow),
        ("growthRate", params.growth_rate),
        ("discountRate", params.discount_rate),
        ("terminalGrowthRate", params.terminal_growth_rate),
        ("marketCap", params.market_cap),
    ];
    if let Some((field, value)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
        return Err(EngineError::InvalidParameter {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}
