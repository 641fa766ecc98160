//! Next-day price direction labels.

use std::fmt;
use std::path::Path;

use shared_utils::dates::parse_date;
use shared_utils::table::Table;

use crate::errors::PipelineError;

pub const MOVEMENT_COLUMN: &str = "next_day_movement";

/// Direction of the next row's price relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Up,
    Down,
    Flat,
    /// No next row, or a price on either side is missing.
    Unknown,
}

impl Movement {
    /// CSV rendering: `1`, `0`, empty, `N/A`.
    pub fn as_label(self) -> &'static str {
        match self {
            Movement::Up => "1",
            Movement::Down => "0",
            Movement::Flat => "",
            Movement::Unknown => "N/A",
        }
    }

    fn between(current: Option<f64>, next: Option<f64>) -> Self {
        match (current, next) {
            (Some(cur), Some(next)) if next > cur => Movement::Up,
            (Some(cur), Some(next)) if next < cur => Movement::Down,
            (Some(cur), Some(next)) if next == cur => Movement::Flat,
            _ => Movement::Unknown,
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Labels each price with the direction to its successor; the last one is always
/// [`Movement::Unknown`].
pub fn label_movements(prices: &[Option<f64>]) -> Vec<Movement> {
    let mut labels: Vec<Movement> = prices
        .windows(2)
        .map(|pair| Movement::between(pair[0], pair[1]))
        .collect();
    if !prices.is_empty() {
        labels.push(Movement::Unknown);
    }
    labels
}

fn parse_price(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Sorts `table` by date (stable, ascending) and writes [`MOVEMENT_COLUMN`].
pub fn label_table(
    table: &mut Table,
    date_column: &str,
    price_column: &str,
) -> Result<(), PipelineError> {
    let date_idx = table
        .column_index(date_column)
        .ok_or_else(|| PipelineError::missing_column(date_column, "movement input"))?;
    let price_idx = table
        .column_index(price_column)
        .ok_or_else(|| PipelineError::missing_column(price_column, "movement input"))?;

    let dates = table
        .column(date_idx)
        .enumerate()
        .map(|(row, raw)| {
            parse_date(raw).ok_or_else(|| PipelineError::InvalidDate {
                row,
                column: date_column.to_string(),
                value: raw.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut order: Vec<usize> = (0..table.len()).collect();
    order.sort_by_key(|&i| dates[i]);
    table.reorder_rows(&order);

    let prices: Vec<Option<f64>> = table.column(price_idx).map(parse_price).collect();
    let labels = label_movements(&prices)
        .into_iter()
        .map(|m| m.as_label().to_string())
        .collect();
    table.set_column(MOVEMENT_COLUMN, labels)?;
    Ok(())
}

/// Labels the CSV at `input` and writes it to `output`.
pub fn label_file(
    input: &Path,
    output: &Path,
    date_column: &str,
    price_column: &str,
) -> Result<(), PipelineError> {
    let mut table = Table::read_csv(input)?;
    label_table(&mut table, date_column, price_column)?;
    table.write_csv(output)?;
    tracing::info!(path = %output.display(), rows = table.len(), "movement labels written");
    Ok(())
}
