use serde::Deserialize;

use crate::models::market_chart::{Candle, MarketChart, Point};

/// `/market_chart` body; every series is a list of `[ms, value]` pairs.
#[derive(Deserialize, Debug, Default)]
pub struct MarketChartResponse {
    #[serde(default)]
    pub prices: Vec<(f64, f64)>,
    #[serde(default)]
    pub market_caps: Vec<(f64, f64)>,
    #[serde(default)]
    pub total_volumes: Vec<(f64, f64)>,
}

/// `/ohlc` body entry: `[ms, open, high, low, close]`.
pub type OhlcResponse = Vec<(f64, f64, f64, f64, f64)>;

fn points(raw: Vec<(f64, f64)>) -> Vec<Point> {
    raw.into_iter()
        .map(|(ts, value)| Point {
            timestamp_ms: ts as i64,
            value,
        })
        .collect()
}

impl From<MarketChartResponse> for MarketChart {
    fn from(resp: MarketChartResponse) -> Self {
        MarketChart {
            prices: points(resp.prices),
            market_caps: points(resp.market_caps),
            total_volumes: points(resp.total_volumes),
        }
    }
}

pub fn candles(raw: OhlcResponse) -> Vec<Candle> {
    raw.into_iter()
        .map(|(ts, open, high, low, close)| Candle {
            timestamp_ms: ts as i64,
            open,
            high,
            low,
            close,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_market_chart_body() {
        let body = r#"{
            "prices": [[1704067200000, 42280.23], [1704153600000, 44187.14]],
            "market_caps": [[1704067200000, 827000000000.0]],
            "total_volumes": [[1704067200000, 13000000000.5], [1704153600000, 21000000000]]
        }"#;
        let chart: MarketChart = serde_json::from_str::<MarketChartResponse>(body).unwrap().into();
        assert_eq!(chart.prices.len(), 2);
        assert_eq!(chart.prices[1].timestamp_ms, 1_704_153_600_000);
        assert_eq!(chart.market_caps.len(), 1);
        assert_eq!(chart.total_volumes[1].value, 21_000_000_000.0);
    }

    #[test]
    fn parses_ohlc_body() {
        let body = "[[1704067200000, 42000, 42500.5, 41800, 42280.23]]";
        let candles = candles(serde_json::from_str(body).unwrap());
        assert_eq!(
            candles,
            [Candle {
                timestamp_ms: 1_704_067_200_000,
                open: 42000.0,
                high: 42500.5,
                low: 41800.0,
                close: 42280.23,
            }]
        );
    }

    #[test]
    fn missing_series_default_to_empty() {
        let chart: MarketChart = serde_json::from_str::<MarketChartResponse>("{}").unwrap().into();
        assert!(chart.is_empty());
    }
}
