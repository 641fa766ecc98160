//! Drops rows that do not mention a keyword anywhere.

use std::path::Path;

use shared_utils::table::Table;

use crate::errors::PipelineError;

/// Outcome of [`filter_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    pub kept: usize,
    pub removed: usize,
}

/// Keeps rows where any cell contains `keyword`, ignoring case.
pub fn filter_table(table: &mut Table, keyword: &str) -> FilterSummary {
    let before = table.len();
    let needle = keyword.to_lowercase();
    table.retain_rows(|row| row.iter().any(|cell| cell.to_lowercase().contains(&needle)));
    FilterSummary {
        kept: table.len(),
        removed: before - table.len(),
    }
}

/// Filters the CSV at `path` in place. An empty file is left untouched.
pub fn filter_file(path: &Path, keyword: &str) -> Result<FilterSummary, PipelineError> {
    let mut table = Table::read_csv(path)?;
    if table.is_empty() {
        tracing::warn!(path = %path.display(), "csv has no rows; nothing to filter");
        return Ok(FilterSummary { kept: 0, removed: 0 });
    }

    let summary = filter_table(&mut table, keyword);
    tracing::info!(
        keyword,
        kept = summary.kept,
        removed = summary.removed,
        "keyword filter applied"
    );
    table.write_csv(path)?;
    Ok(summary)
}
