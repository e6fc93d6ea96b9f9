//! End-to-end: statement file -> table -> per-row CAGR, and scenario -> valuation summary.

use std::io::Write;

use engine::config::{AnalyzerSettings, RowWidthPolicy};
use engine::data::{AnalysisSession, TableParser};
use engine::services::{analyze_table, format_cagr, summarize_valuation};
use engine::valuation::{dcf, STANDARD_CAGR_WINDOWS};
use shared::models::{CashFlowParams, ScenarioField};
use tempfile::NamedTempFile;

fn statement_csv(years: usize) -> String {
    // Newest first, revenue growing 10% a year from 100.
    let mut header = String::from("Period Ending");
    let mut filing = String::from("Report Filing");
    let mut revenue = String::from("Revenue");
    let mut loss = String::from("Net Income");
    for i in (0..years).rev() {
        header.push_str(&format!(",12/31/{}", 2000 + i));
        filing.push_str(&format!(",02/01/{}", 2001 + i));
        revenue.push_str(&format!(",\"${:.4}\"", 100.0 * 1.1f64.powi(i as i32)));
        loss.push_str(",-$5.00");
    }
    format!("{}\n{}\n{}\n{}\n", header, filing, revenue, loss)
}

#[test]
fn test_statement_file_to_cagr_report() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", statement_csv(21)).unwrap();

    let table = TableParser::default().parse_file(file.path()).unwrap();
    assert_eq!(table.headers.len(), 21);
    assert_eq!(table.headers[0], "12/31/2020");

    let analyses = analyze_table(&table, &STANDARD_CAGR_WINDOWS);
    let revenue = &analyses[0];
    assert_eq!(revenue.chart.labels[0], "12/31/2000");
    assert_eq!(revenue.chart.period_dates()[0], chrono::NaiveDate::from_ymd_opt(2000, 12, 31));

    // 5-element window spans 4 steps of 10% but is annualized over 5 periods.
    let expected_5 = (1.1f64.powf(4.0 / 5.0) - 1.0) * 100.0;
    let cagr_5 = revenue.cagr[0].percent.unwrap();
    assert!((cagr_5 - expected_5).abs() < 1e-3);
    assert_eq!(revenue.cagr.iter().map(|c| c.periods).collect::<Vec<_>>(), vec![5, 10, 15, 20]);

    let net_income = &analyses[1];
    assert!(net_income.cagr.iter().all(|c| format_cagr(c.percent) == "N/A"));
}

#[test]
fn test_short_history_still_reports() {
    let table = TableParser::default().parse(&statement_csv(1)).unwrap();
    let analyses = analyze_table(&table, &STANDARD_CAGR_WINDOWS);
    assert!(analyses[0].cagr.iter().all(|c| c.percent.is_none()));
}

#[test]
fn test_scenario_summary() {
    let params = CashFlowParams {
        current_cash_flow: 100.0,
        growth_rate: 10.0,
        discount_rate: 8.0,
        terminal_growth_rate: 2.0,
        market_cap: 2000.0,
        years: 5,
    };
    let result = dcf(&params).unwrap();
    let summary = summarize_valuation(&params, &result, "billions");
    assert!((summary.total_present_value - result.total_present_value).abs() < f64::EPSILON);
    let rendered = summary.to_string();
    assert!(rendered.starts_with("Cash Flow Growth Total: "));
    assert!(rendered.contains("Current Market Cap: 2000 billions"));
}

#[test]
fn test_session_with_pass_through_settings() {
    let settings = AnalyzerSettings {
        row_width_policy: RowWidthPolicy::PassThrough,
        cagr_windows: vec![2],
        ..AnalyzerSettings::default()
    };
    let mut session = AnalysisSession::new(settings);
    let text = "Period Ending,2023,2022,2021\nFiling,a,b,c\nRevenue,$14.40,$12.00\n";
    let analyses = session.load_table(text).unwrap();
    // Short row kept as-is; oldest-first it reads [12.00, 14.40].
    assert!((analyses[0].cagr[0].percent.unwrap() - 9.5445).abs() < 1e-4);

    for (field, value) in [
        (ScenarioField::CurrentCashFlow, "100"),
        (ScenarioField::GrowthRate, "10"),
        (ScenarioField::DiscountRate, "8"),
        (ScenarioField::TerminalGrowthRate, "2"),
        (ScenarioField::MarketCap, "1500"),
        (ScenarioField::Years, "5"),
    ] {
        session.set_field(field, value);
    }
    let summary = session.summary().unwrap();
    assert_eq!(summary.unit, "billions");
    assert!(session.last_error().is_none());
}
