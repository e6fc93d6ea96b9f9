use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::{currency_format, period_format};

/// A statement export split into period headers and labeled rows.
///
/// Headers keep file order, which for statement exports is newest-first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl RawTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Headers in oldest-first order.
    pub fn chronological_headers(&self) -> Vec<String> {
        self.headers.iter().rev().cloned().collect()
    }
}

/// One line item ("Revenue", "Free Cash Flow", ...) with a raw cell per header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub label: String,
    pub values: Vec<String>,
}

impl Row {
    /// Cells parsed as numbers, same length and order as `values`.
    /// Unparseable cells become `NaN`.
    pub fn numeric_series(&self) -> Vec<f64> {
        currency_format::parse_cells(&self.values)
    }

    /// Raw cells in oldest-first order.
    pub fn chronological_values(&self) -> Vec<String> {
        self.values.iter().rev().cloned().collect()
    }
}

/// A fully specified valuation scenario.
///
/// Rates are percent-scale (`8.0` means 8%). `current_cash_flow` and
/// `market_cap` share one unit, e.g. billions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlowParams {
    pub current_cash_flow: f64,
    pub growth_rate: f64,
    pub discount_rate: f64,
    pub terminal_growth_rate: f64,
    pub market_cap: f64,
    pub years: i32,
}

/// Output of a DCF projection. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DcfResult {
    pub projected_cash_flows: Vec<f64>,
    pub discounted_cash_flows: Vec<f64>,
    pub projected_total: f64,
    pub discounted_total: f64,
    pub terminal_value: f64,
    pub discounted_terminal_value: f64,
    pub total_present_value: f64,
}

impl DcfResult {
    pub fn years(&self) -> usize {
        self.projected_cash_flows.len()
    }
}

/// The six inputs of the scenario form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioField {
    CurrentCashFlow,
    GrowthRate,
    DiscountRate,
    TerminalGrowthRate,
    MarketCap,
    Years,
}

impl ScenarioField {
    pub const ALL: [ScenarioField; 6] = [
        ScenarioField::CurrentCashFlow,
        ScenarioField::GrowthRate,
        ScenarioField::DiscountRate,
        ScenarioField::TerminalGrowthRate,
        ScenarioField::MarketCap,
        ScenarioField::Years,
    ];

    /// Form key, as a front-end would name the input.
    pub fn key(self) -> &'static str {
        match self {
            ScenarioField::CurrentCashFlow => "currentCashFlow",
            ScenarioField::GrowthRate => "growthRate",
            ScenarioField::DiscountRate => "discountRate",
            ScenarioField::TerminalGrowthRate => "terminalGrowthRate",
            ScenarioField::MarketCap => "marketCap",
            ScenarioField::Years => "years",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScenarioField::CurrentCashFlow => "Current Cash Flow",
            ScenarioField::GrowthRate => "Growth Rate",
            ScenarioField::DiscountRate => "Discount Rate",
            ScenarioField::TerminalGrowthRate => "Terminal Growth Rate",
            ScenarioField::MarketCap => "Market Cap",
            ScenarioField::Years => "Years",
        }
    }

    fn index(self) -> usize {
        match self {
            ScenarioField::CurrentCashFlow => 0,
            ScenarioField::GrowthRate => 1,
            ScenarioField::DiscountRate => 2,
            ScenarioField::TerminalGrowthRate => 3,
            ScenarioField::MarketCap => 4,
            ScenarioField::Years => 5,
        }
    }
}

impl fmt::Display for ScenarioField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ScenarioField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioField::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown scenario field '{}'", s))
    }
}

/// Raw text of the scenario form, filled in one field at a time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDraft {
    fields: [String; 6],
}

impl ScenarioDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: ScenarioField, raw: impl Into<String>) {
        self.fields[field.index()] = raw.into();
    }

    pub fn get(&self, field: ScenarioField) -> &str {
        &self.fields[field.index()]
    }

    /// True once every field holds non-blank text.
    pub fn is_complete(&self) -> bool {
        self.fields.iter().all(|value| !value.trim().is_empty())
    }
}

/// Labeled points for one line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Period labels resolved to dates where they parse.
    pub fn period_dates(&self) -> Vec<Option<NaiveDate>> {
        self.labels
            .iter()
            .map(|l| period_format::parse_period_label(l))
            .collect()
    }
}

/// CAGR over one trailing window. `percent` is `None` when undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowCagr {
    pub periods: usize,
    pub percent: Option<f64>,
}

/// Per-row output of a table analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowAnalysis {
    pub label: String,
    pub chart: ChartSeries,
    pub cagr: Vec<WindowCagr>,
}

/// Explicit-horizon projection laid out for a two-line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionChart {
    pub labels: Vec<String>,
    pub projected: Vec<f64>,
    pub discounted: Vec<f64>,
}

/// Headline figures of a valuation, compared against market cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationSummary {
    pub projected_total: f64,
    pub discounted_total: f64,
    pub terminal_value: f64,
    pub discounted_terminal_value: f64,
    pub total_present_value: f64,
    pub market_cap: f64,
    pub percentage_difference: f64,
    pub unit: String,
}

impl ValuationSummary {
    /// Present value exceeds market cap.
    pub fn is_undervalued(&self) -> bool {
        self.percentage_difference > 0.0
    }
}

impl fmt::Display for ValuationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = &self.unit;
        writeln!(f, "Cash Flow Growth Total: {:.2} {unit}", self.projected_total)?;
        writeln!(f, "Discounted Cash Flow Growth Total: {:.2} {unit}", self.discounted_total)?;
        writeln!(f, "Terminal Value: {:.2} {unit}", self.terminal_value)?;
        writeln!(f, "Discounted Terminal Value: {:.2} {unit}", self.discounted_terminal_value)?;
        writeln!(f)?;
        writeln!(f, "Total Present Value: {:.2} {unit}", self.total_present_value)?;
        writeln!(f, "Current Market Cap: {} {unit}", self.market_cap)?;
        write!(f, "Difference: {:.2}%", self.percentage_difference)
    }
}
