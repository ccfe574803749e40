//! CSV parsing with column type inference.
//!
//! The format is deliberately minimal: newline-separated records, comma
//! separated fields, no quoting or escaping. A comma inside a value splits it.
//!
//! - The first non-empty line is the header; each name is trimmed.
//! - Every later line is trimmed, split on commas and each field trimmed.
//! - Empty lines and lines whose field count differs from the header are
//!   skipped silently (logged at `debug`), never partially accepted.
//! - Only the first [`AnalysisConfig::type_sample_rows`] lines after the
//!   header feed type inference. Skipped lines still consume window slots.
//!
//! Type precedence rules live in the `type_inference` submodule.

mod type_inference;

use tracing::{debug, info};

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::types::{Column, ParsedDataset, Row};

use type_inference::ColumnTypeTracker;

/// Parse CSV text with the default configuration.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyInput`] when the text has no non-empty
/// line. A header-only file is not an error: it yields zero rows.
pub fn parse_csv(text: &str) -> Result<ParsedDataset> {
    CsvParser::default().parse(text)
}

/// Header-driven CSV parser.
#[derive(Debug, Clone, Default)]
pub struct CsvParser {
    config: AnalysisConfig,
}

impl CsvParser {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Parse `text` into rows and an inferred column schema.
    pub fn parse(&self, text: &str) -> Result<ParsedDataset> {
        let mut lines = text.split('\n');

        let header_line = lines
            .by_ref()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .ok_or(AnalysisError::EmptyInput)?;

        let headers: Vec<String> = header_line
            .split(',')
            .map(|name| name.trim().to_string())
            .collect();

        let mut tracker = ColumnTypeTracker::new(headers.len());
        let mut rows = Vec::new();
        let mut skipped_empty = 0usize;
        let mut skipped_malformed = 0usize;

        for (offset, raw_line) in lines.enumerate() {
            let line_number = offset + 1;
            let line = raw_line.trim();
            if line.is_empty() {
                skipped_empty += 1;
                continue;
            }

            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() != headers.len() {
                debug!(
                    line = line_number,
                    expected = headers.len(),
                    found = fields.len(),
                    "Skipping malformed row"
                );
                skipped_malformed += 1;
                continue;
            }

            if line_number <= self.config.type_sample_rows {
                tracker.observe_row(&fields);
            }

            rows.push(
                headers
                    .iter()
                    .map(String::as_str)
                    .zip(fields.iter().copied())
                    .collect::<Row>(),
            );
        }

        let columns: Vec<Column> = headers
            .into_iter()
            .zip(tracker.finish())
            .map(|(name, column_type)| Column::new(name, column_type))
            .collect();

        info!(
            rows = rows.len(),
            columns = columns.len(),
            skipped_empty,
            skipped_malformed,
            "Parsed CSV"
        );

        Ok(ParsedDataset { rows, columns })
    }
}
