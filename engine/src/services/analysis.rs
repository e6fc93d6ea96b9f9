// Combines parsed tables and valuation results into the records a front-end renders.
use shared::models::{
    CashFlowParams, ChartSeries, DcfResult, ProjectionChart, RawTable, Row, RowAnalysis, ValuationSummary,
    WindowCagr,
};

use crate::valuation::{Cagr, SeriesIndicator};

/// Charts and trailing CAGRs for every row of a table.
///
/// Rows arrive newest-first; both the chart and the CAGR windows use the
/// reversed, oldest-first order.
pub fn analyze_table(table: &RawTable, windows: &[usize]) -> Vec<RowAnalysis> {
    let indicators: Vec<Cagr> = windows.iter().map(|&w| Cagr::new(w)).collect();
    let labels = table.chronological_headers();

    table
        .rows
        .iter()
        .map(|row| analyze_row(row, &labels, &indicators))
        .collect()
}

fn analyze_row(row: &Row, chronological_labels: &[String], indicators: &[Cagr]) -> RowAnalysis {
    let chronological = row.chronological_values();

    let mut values = row.numeric_series();
    values.reverse();
    if values.iter().any(|v| v.is_nan()) {
        tracing::warn!(label = %row.label, "Row contains cells that are not numbers");
    }

    let cagr = indicators
        .iter()
        .map(|indicator| WindowCagr {
            periods: indicator.periods(),
            percent: indicator.calculate(&chronological),
        })
        .collect();

    RowAnalysis {
        label: row.label.clone(),
        chart: ChartSeries {
            label: row.label.clone(),
            labels: chronological_labels.to_vec(),
            values,
        },
        cagr,
    }
}

/// Headline figures plus the gap between present value and market cap.
pub fn summarize_valuation(params: &CashFlowParams, result: &DcfResult, unit: &str) -> ValuationSummary {
    ValuationSummary {
        projected_total: result.projected_total,
        discounted_total: result.discounted_total,
        terminal_value: result.terminal_value,
        discounted_terminal_value: result.discounted_terminal_value,
        total_present_value: result.total_present_value,
        market_cap: params.market_cap,
        percentage_difference: percentage_difference(result.total_present_value, params.market_cap),
        unit: unit.to_string(),
    }
}

/// `(present_value - market_cap) / market_cap * 100`, or 0 without a usable market cap.
pub fn percentage_difference(total_present_value: f64, market_cap: f64) -> f64 {
    if market_cap == 0.0 || market_cap.is_nan() {
        return 0.0;
    }
    (total_present_value - market_cap) / market_cap * 100.0
}

pub fn projection_chart(result: &DcfResult) -> ProjectionChart {
    ProjectionChart {
        labels: (1..=result.years()).map(|y| format!("Year {}", y)).collect(),
        projected: result.projected_cash_flows.clone(),
        discounted: result.discounted_cash_flows.clone(),
    }
}

pub fn format_cagr(percent: Option<f64>) -> String {
    match percent {
        Some(p) => format!("{:.2}%", p),
        None => "N/A".to_string(),
    }
}
