//! Per-day sentiment aggregation and left join onto the price series.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared_utils::dates::parse_date;
use shared_utils::table::Table;

use crate::errors::PipelineError;
use crate::sentiment::FINAL_WEIGHTED_SCORE;

/// How a merged column combines with a column of the same name already on the main table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeMode {
    /// Overwrite the existing column.
    #[default]
    Replace,
    /// Add the new per-day sums to the existing values.
    Additive,
}

/// One sentiment file to fold into the main table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MergeSource {
    pub path: PathBuf,
    #[serde(default = "default_date_column")]
    pub date_column: String,
    #[serde(default = "default_score_column")]
    pub score_column: String,
    /// Column written on the main table.
    pub output_column: String,
}

fn default_date_column() -> String {
    "Date".to_string()
}

fn default_score_column() -> String {
    FINAL_WEIGHTED_SCORE.to_string()
}

impl MergeSource {
    pub fn new(path: impl Into<PathBuf>, output_column: &str) -> Self {
        Self {
            path: path.into(),
            date_column: default_date_column(),
            score_column: default_score_column(),
            output_column: output_column.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MergeConfig {
    pub main: PathBuf,
    #[serde(default = "default_date_column")]
    pub main_date_column: String,
    pub sources: Vec<MergeSource>,
    pub output: PathBuf,
    #[serde(default)]
    pub mode: MergeMode,
}

/// Sums `score_column` per calendar day.
///
/// Rows whose date or score cannot be parsed are skipped and counted in the log.
pub fn aggregate_by_date(
    table: &Table,
    date_column: &str,
    score_column: &str,
) -> Result<BTreeMap<NaiveDate, f64>, PipelineError> {
    let date_idx = table
        .column_index(date_column)
        .ok_or_else(|| PipelineError::missing_column(date_column, "sentiment file"))?;
    let score_idx = table
        .column_index(score_column)
        .ok_or_else(|| PipelineError::missing_column(score_column, "sentiment file"))?;

    let mut sums = BTreeMap::new();
    let mut skipped = 0usize;
    for row in table.rows() {
        let date = parse_date(&row[date_idx]);
        let score = row[score_idx].trim().parse::<f64>().ok().filter(|s| s.is_finite());
        match (date, score) {
            (Some(date), Some(score)) => *sums.entry(date).or_insert(0.0) += score,
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::warn!(
            skipped,
            column = score_column,
            "rows without a usable date or score were ignored"
        );
    }
    Ok(sums)
}

/// Left-joins per-day sums onto `main` as `output_column`; days without an entry get 0.
pub fn merge_into(
    main: &mut Table,
    main_date_column: &str,
    daily: &BTreeMap<NaiveDate, f64>,
    output_column: &str,
    mode: MergeMode,
) -> Result<(), PipelineError> {
    let date_idx = main
        .column_index(main_date_column)
        .ok_or_else(|| PipelineError::missing_column(main_date_column, "main table"))?;
    let existing = match mode {
        MergeMode::Additive => main.column_index(output_column),
        MergeMode::Replace => None,
    };

    let values = main
        .rows()
        .iter()
        .enumerate()
        .map(|(row_no, row)| {
            let raw = &row[date_idx];
            let date = parse_date(raw).ok_or_else(|| PipelineError::InvalidDate {
                row: row_no,
                column: main_date_column.to_string(),
                value: raw.clone(),
            })?;
            let base = existing.map_or(0.0, |i| row[i].trim().parse::<f64>().unwrap_or(0.0));
            Ok((base + daily.get(&date).copied().unwrap_or(0.0)).to_string())
        })
        .collect::<Result<Vec<_>, PipelineError>>()?;

    main.set_column(output_column, values)?;
    Ok(())
}

/// Reads every input, merges each source onto the main table and writes `config.output`.
///
/// All inputs are read before anything is written, so a missing file leaves
/// no output behind.
pub fn merge_files(config: &MergeConfig) -> Result<Table, PipelineError> {
    let mut main = Table::read_csv(&config.main)?;
    let sources = config
        .sources
        .iter()
        .map(|source| Table::read_csv(&source.path).map(|t| (source, t)))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::info!(main = %config.main.display(), sources = sources.len(), "loaded merge inputs");

    for (source, table) in &sources {
        let daily = aggregate_by_date(table, &source.date_column, &source.score_column)?;
        tracing::info!(
            source = %source.path.display(),
            days = daily.len(),
            column = %source.output_column,
            "merging daily sentiment"
        );
        merge_into(
            &mut main,
            &config.main_date_column,
            &daily,
            &source.output_column,
            config.mode,
        )?;
    }

    main.write_csv(&config.output)?;
    tracing::info!(
        path = %config.output.display(),
        rows = main.len(),
        "merged training data written"
    );
    Ok(main)
}
