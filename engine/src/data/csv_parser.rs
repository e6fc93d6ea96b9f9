use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use shared::models::{RawTable, Row};

use crate::config::RowWidthPolicy;
use crate::error::EngineError;

/// Splits a statement export into period headers and labeled rows.
///
/// Layout expected:
/// - line 1: x-axis label, then one header per period (newest first)
/// - line 2: metadata such as filing dates, skipped
/// - remaining lines: line-item label, then one raw cell per period
///
/// Cells are kept as text; numeric conversion happens downstream.
pub struct TableParser {
    row_width_policy: RowWidthPolicy,
}

impl TableParser {
    pub fn new(row_width_policy: RowWidthPolicy) -> Self {
        Self { row_width_policy }
    }

    pub fn parse(&self, raw_text: &str) -> Result<RawTable, EngineError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(raw_text.as_bytes());

        let mut records = rdr.records();

        let header_record = match records.next() {
            Some(result) => result?,
            None => return Err(EngineError::TableStructure("missing header row".to_string())),
        };
        let headers: Vec<String> = header_record
            .iter()
            .skip(1)
            .map(|h| h.trim().to_string())
            .collect();

        // Filing-date row.
        if let Some(result) = records.next() {
            result?;
        }

        let mut rows = Vec::new();
        for result in records {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            if is_blank(&record) {
                continue;
            }
            let row = Self::row_from_record(&record);

            if row.values.len() != headers.len() {
                let msg = format!(
                    "row '{}' at line {} has {} values, expected {}",
                    row.label,
                    line,
                    row.values.len(),
                    headers.len()
                );
                match self.row_width_policy {
                    RowWidthPolicy::Reject => return Err(EngineError::TableStructure(msg)),
                    RowWidthPolicy::PassThrough => {
                        tracing::warn!(label = %row.label, line, "Keeping mismatched row: {}", msg);
                    }
                }
            }
            rows.push(row);
        }

        tracing::debug!(periods = headers.len(), rows = rows.len(), "Parsed statement table");
        Ok(RawTable { headers, rows })
    }

    pub fn parse_file(&self, path: &Path) -> Result<RawTable, EngineError> {
        let text = fs::read_to_string(path)?;
        self.parse(&text)
    }

    fn row_from_record(record: &StringRecord) -> Row {
        let mut fields = record.iter();
        let label = fields.next().unwrap_or_default().trim().to_string();
        let values = fields.map(str::to_string).collect();
        Row { label, values }
    }
}

impl Default for TableParser {
    fn default() -> Self {
        Self::new(RowWidthPolicy::default())
    }
}

// A trailing "," line or a line of empty cells carries no line item.
fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}
