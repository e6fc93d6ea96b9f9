// Cash flow analyzer entry point
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use engine::config::AnalyzerSettings;
use engine::data::TableParser;
use engine::services::{analyze_table, format_cagr, projection_chart, summarize_valuation};
use engine::valuation::dcf;
use shared::models::CashFlowParams;
use tracing::{error, info};

const USAGE: &str = "usage: cash-flow-analyzer <statement.csv> [scenario.json] [settings.json]";

fn main() -> ExitCode {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    match run(std::env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<()> {
    let Some(csv_path) = args.first().map(PathBuf::from) else {
        bail!(USAGE);
    };
    let scenario_path = args.get(1).map(PathBuf::from);

    let settings = match args.get(2) {
        Some(path) => AnalyzerSettings::load_from_path(Path::new(path))
            .with_context(|| format!("Failed to load settings from '{}'", path))?,
        None => AnalyzerSettings::default(),
    };

    info!("Starting Cash Flow Analyzer...");

    let table = TableParser::new(settings.row_width_policy)
        .parse_file(&csv_path)
        .with_context(|| format!("Failed to parse statement '{}'", csv_path.display()))?;
    info!(rows = table.rows.len(), "Statement loaded from {}", csv_path.display());

    for row in analyze_table(&table, &settings.cagr_windows) {
        println!("{}", row.label);
        for window in &row.cagr {
            println!("  {} Years: {}", window.periods, format_cagr(window.percent));
        }
    }

    if let Some(path) = scenario_path {
        let params = load_scenario(&path)?;
        let result = dcf(&params).with_context(|| format!("Scenario '{}' cannot be valued", path.display()))?;

        println!();
        println!("Discounted Cash Flow Analysis");
        let chart = projection_chart(&result);
        for ((label, projected), discounted) in chart.labels.iter().zip(&chart.projected).zip(&chart.discounted) {
            println!("  {}: {:.2} (discounted {:.2})", label, projected, discounted);
        }
        println!("{}", summarize_valuation(&params, &result, &settings.value_unit));
    }

    Ok(())
}

fn load_scenario(path: &Path) -> Result<CashFlowParams> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario '{}'", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Invalid scenario JSON in '{}'", path.display()))
}
