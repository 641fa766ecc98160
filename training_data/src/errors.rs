use std::path::PathBuf;

use shared_utils::table::TableError;
use thiserror::Error;

/// Errors raised by the CSV pipeline steps.
///
/// Every variant aborts the step before its output file is written.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// An input file the step depends on does not exist.
    #[error("Required input file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// An input table lacks a column the step depends on.
    #[error("Column '{column}' not found in {context}")]
    MissingColumn { column: String, context: String },

    /// A date cell could not be parsed.
    #[error("Row {row}: unparseable date '{value}' in column '{column}'")]
    InvalidDate {
        row: usize,
        column: String,
        value: String,
    },

    /// Reading or writing a CSV file failed.
    #[error(transparent)]
    Table(TableError),
}

impl From<TableError> for PipelineError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::NotFound(path) => PipelineError::MissingFile(path),
            other => PipelineError::Table(other),
        }
    }
}

impl PipelineError {
    pub(crate) fn missing_column(column: &str, context: impl Into<String>) -> Self {
        PipelineError::MissingColumn {
            column: column.to_string(),
            context: context.into(),
        }
    }
}
