//! Rewrites a raw timestamp column into a leading `M/D/YYYY` date column.

use std::path::Path;

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use shared_utils::dates::{TWITTER_TIMESTAMP_FORMAT, format_month_day_year, parse_date};
use shared_utils::table::Table;

use crate::errors::PipelineError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizeConfig {
    /// Raw timestamp column, dropped after conversion.
    pub source_column: String,
    /// `chrono` format of the raw timestamps.
    pub source_format: String,
    /// Name of the rendered date column, always placed first.
    pub target_column: String,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            source_column: "tweet_created_at".to_string(),
            source_format: TWITTER_TIMESTAMP_FORMAT.to_string(),
            target_column: "Date".to_string(),
        }
    }
}

/// Converts `source_column` into `target_column` and moves it to the front.
///
/// When the source column is already gone but the target exists, the target
/// is re-rendered from whatever date spelling it holds, which makes the step
/// idempotent.
pub fn normalize_table(table: &mut Table, config: &NormalizeConfig) -> Result<(), PipelineError> {
    let (column, dates) = match table.column_index(&config.source_column) {
        Some(idx) => {
            let dates = table
                .column(idx)
                .enumerate()
                .map(|(row, raw)| {
                    DateTime::parse_from_str(raw.trim(), &config.source_format)
                        .map(|dt| dt.date_naive())
                        .map_err(|_| invalid_date(row, &config.source_column, raw))
                })
                .collect::<Result<Vec<_>, _>>()?;
            (config.source_column.as_str(), dates)
        }
        None => {
            let idx = table
                .column_index(&config.target_column)
                .ok_or_else(|| {
                    PipelineError::missing_column(&config.source_column, "normalizer input")
                })?;
            let dates = table
                .column(idx)
                .enumerate()
                .map(|(row, raw)| {
                    parse_date(raw).ok_or_else(|| invalid_date(row, &config.target_column, raw))
                })
                .collect::<Result<Vec<_>, _>>()?;
            (config.target_column.as_str(), dates)
        }
    };
    let column = column.to_string();

    let rendered = dates.into_iter().map(format_month_day_year).collect();
    table.drop_column(&column);
    table.insert_column(0, &config.target_column, rendered)?;
    Ok(())
}

/// Normalizes `input` and writes the result to `output`.
pub fn normalize_file(
    input: &Path,
    output: &Path,
    config: &NormalizeConfig,
) -> Result<(), PipelineError> {
    let mut table = Table::read_csv(input)?;
    tracing::info!(path = %input.display(), column = %config.source_column, "normalizing dates");
    normalize_table(&mut table, config)?;
    table.write_csv(output)?;
    tracing::info!(path = %output.display(), rows = table.len(), "normalized dates written");
    Ok(())
}

fn invalid_date(row: usize, column: &str, value: &str) -> PipelineError {
    PipelineError::InvalidDate {
        row,
        column: column.to_string(),
        value: value.to_string(),
    }
}
