//! One row of the coin CSV.

use chrono::NaiveDate;

/// CSV header, in column order.
pub const HEADER: [&str; 8] = [
    "date",
    "open",
    "high",
    "low",
    "close",
    "volume",
    "price",
    "market_cap",
];

/// Market data for one UTC calendar day. Fields absent from either source are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
    pub price: Option<f64>,
    pub market_cap: Option<f64>,
}

impl DailyRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            ..Self::default()
        }
    }

    /// Cells in [`HEADER`] order; missing values render as empty strings.
    pub fn to_row(&self) -> Vec<String> {
        let cell = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
        vec![
            self.date.format("%Y-%m-%d").to_string(),
            cell(self.open),
            cell(self.high),
            cell(self.low),
            cell(self.close),
            cell(self.volume),
            cell(self.price),
            cell(self.market_cap),
        ]
    }
}
