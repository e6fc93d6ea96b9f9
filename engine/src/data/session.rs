// Holds the current table and scenario, recomputing derived results on every change.
use shared::models::{
    CashFlowParams, DcfResult, RawTable, RowAnalysis, ScenarioDraft, ScenarioField, ValuationSummary,
};

use crate::config::AnalyzerSettings;
use crate::data::csv_parser::TableParser;
use crate::error::EngineError;
use crate::services::analysis;
use crate::valuation;

/// Single-writer state: one table, one scenario draft, and everything derived from them.
///
/// Loading a table replaces the previous one outright. Every scenario edit
/// reruns the whole projection once all six fields are filled in.
pub struct AnalysisSession {
    settings: AnalyzerSettings,
    table: Option<RawTable>,
    row_analyses: Vec<RowAnalysis>,
    draft: ScenarioDraft,
    params: Option<CashFlowParams>,
    valuation: Option<DcfResult>,
    last_error: Option<EngineError>,
}

impl AnalysisSession {
    pub fn new(settings: AnalyzerSettings) -> Self {
        AnalysisSession {
            settings,
            table: None,
            row_analyses: Vec::new(),
            draft: ScenarioDraft::new(),
            params: None,
            valuation: None,
            last_error: None,
        }
    }

    /// Parses `raw_text` and swaps it in as the current table.
    ///
    /// On failure the previous table and its analyses are kept.
    pub fn load_table(&mut self, raw_text: &str) -> Result<&[RowAnalysis], EngineError> {
        let table = TableParser::new(self.settings.row_width_policy).parse(raw_text)?;
        self.row_analyses = analysis::analyze_table(&table, &self.settings.cagr_windows);
        tracing::info!(rows = table.rows.len(), periods = table.headers.len(), "Loaded new table");
        self.table = Some(table);
        Ok(&self.row_analyses)
    }

    pub fn set_field(&mut self, field: ScenarioField, raw: impl Into<String>) {
        self.draft.set(field, raw);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.params = None;
        self.valuation = None;
        self.last_error = None;

        let Some(built) = valuation::params_from_draft(&self.draft) else {
            return;
        };
        match built.and_then(|params| valuation::dcf(&params).map(|result| (params, result))) {
            Ok((params, result)) => {
                tracing::debug!(total_present_value = result.total_present_value, "Recomputed valuation");
                self.params = Some(params);
                self.valuation = Some(result);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Scenario could not be valued");
                self.last_error = Some(e);
            }
        }
    }

    pub fn table(&self) -> Option<&RawTable> {
        self.table.as_ref()
    }

    pub fn row_analyses(&self) -> &[RowAnalysis] {
        &self.row_analyses
    }

    pub fn draft(&self) -> &ScenarioDraft {
        &self.draft
    }

    pub fn valuation(&self) -> Option<&DcfResult> {
        self.valuation.as_ref()
    }

    pub fn summary(&self) -> Option<ValuationSummary> {
        let params = self.params.as_ref()?;
        let result = self.valuation.as_ref()?;
        Some(analysis::summarize_valuation(params, result, &self.settings.value_unit))
    }

    pub fn last_error(&self) -> Option<&EngineError> {
        self.last_error.as_ref()
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new(AnalyzerSettings::default())
    }
}
