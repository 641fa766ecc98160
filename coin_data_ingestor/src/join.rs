//! Outer join of the market chart and the OHLC candles by UTC calendar day.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use shared_utils::dates::day_from_millis;

use crate::models::{
    daily_record::DailyRecord,
    market_chart::{Candle, MarketChart},
};

/// Joins both sources into one record per day, ascending by date.
///
/// The chart side pairs the i-th price with the i-th market cap and volume.
/// A day present in only one source keeps the other side's fields as `None`.
/// When a source has several samples on the same day the last one wins, so
/// output dates are unique.
pub fn join_daily(chart: &MarketChart, ohlc: &[Candle]) -> Vec<DailyRecord> {
    let mut days: BTreeMap<NaiveDate, DailyRecord> = BTreeMap::new();
    let mut dropped = 0usize;

    for (i, point) in chart.prices.iter().enumerate() {
        let Some(date) = day_from_millis(point.timestamp_ms) else {
            dropped += 1;
            continue;
        };
        let record = days.entry(date).or_insert_with(|| DailyRecord::new(date));
        record.price = Some(point.value);
        record.market_cap = chart.market_caps.get(i).map(|p| p.value);
        record.volume = chart.total_volumes.get(i).map(|p| p.value);
    }

    for candle in ohlc {
        let Some(date) = day_from_millis(candle.timestamp_ms) else {
            dropped += 1;
            continue;
        };
        let record = days.entry(date).or_insert_with(|| DailyRecord::new(date));
        record.open = Some(candle.open);
        record.high = Some(candle.high);
        record.low = Some(candle.low);
        record.close = Some(candle.close);
    }

    if dropped > 0 {
        tracing::warn!(dropped, "samples with out-of-range timestamps were ignored");
    }
    days.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::market_chart::Point;

    const DAY_MS: i64 = 86_400_000;
    // 2024-01-01T00:00:00Z
    const JAN1: i64 = 1_704_067_200_000;

    fn point(ts: i64, value: f64) -> Point {
        Point { timestamp_ms: ts, value }
    }

    fn candle(ts: i64, close: f64) -> Candle {
        Candle {
            timestamp_ms: ts,
            open: close - 1.0,
            high: close + 1.0,
            low: close - 2.0,
            close,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn keeps_days_from_either_source() {
        let chart = MarketChart {
            prices: vec![point(JAN1, 100.0), point(JAN1 + DAY_MS, 110.0)],
            market_caps: vec![point(JAN1, 1e9), point(JAN1 + DAY_MS, 1.1e9)],
            total_volumes: vec![point(JAN1, 5.0), point(JAN1 + DAY_MS, 6.0)],
        };
        let ohlc = vec![candle(JAN1 + DAY_MS, 109.0), candle(JAN1 + 2 * DAY_MS, 120.0)];

        let rows = join_daily(&chart, &ohlc);
        let dates: Vec<_> = rows.iter().map(|r| r.date).collect();
        assert_eq!(dates, [day(1), day(2), day(3)]);

        assert_eq!(rows[0].price, Some(100.0));
        assert_eq!(rows[0].close, None);
        assert_eq!(rows[1].close, Some(109.0));
        assert_eq!(rows[1].market_cap, Some(1.1e9));
        assert_eq!(rows[2].price, None);
        assert_eq!(rows[2].open, Some(119.0));
    }

    #[test]
    fn same_day_samples_collapse_to_the_last() {
        let chart = MarketChart {
            prices: vec![point(JAN1, 100.0), point(JAN1 + 3_600_000, 101.0)],
            market_caps: vec![],
            total_volumes: vec![],
        };
        let ohlc = vec![candle(JAN1 + 4 * 3_600_000, 98.0), candle(JAN1 + 8 * 3_600_000, 99.0)];

        let rows = join_daily(&chart, &ohlc);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].price, Some(101.0));
        assert_eq!(rows[0].close, Some(99.0));
        assert_eq!(rows[0].volume, None);
    }

    #[test]
    fn truncates_to_utc_day() {
        let chart = MarketChart {
            prices: vec![point(JAN1 + DAY_MS - 1, 1.0)],
            ..MarketChart::default()
        };
        assert_eq!(join_daily(&chart, &[])[0].date, day(1));
    }
}
