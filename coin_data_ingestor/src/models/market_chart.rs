//! Canonical in-memory form of the two provider endpoints.
//!
//! Timestamps stay in epoch milliseconds until [`join_daily`](crate::join::join_daily)
//! truncates them to calendar days.

/// A `(timestamp, value)` sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub timestamp_ms: i64,
    pub value: f64,
}

/// Price, market cap and volume series. The three are aligned by position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketChart {
    pub prices: Vec<Point>,
    pub market_caps: Vec<Point>,
    pub total_volumes: Vec<Point>,
}

impl MarketChart {
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// One OHLC candle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    pub timestamp_ms: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}
