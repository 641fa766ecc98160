use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use coin_data_ingestor::{
    IngestError,
    ingest::{fetch_daily_records, ingest},
    io::csv_sink::CsvSink,
    models::{
        market_chart::{Candle, MarketChart, Point},
        request_params::MarketDataParams,
    },
    providers::{ApiSnafu, DataProvider, ProviderError, RateLimitedSnafu},
};
use reqwest::StatusCode;
use shared_utils::pacing::RequestPacer;

const JAN1: i64 = 1_704_067_200_000;
const DAY_MS: i64 = 86_400_000;

/// Serves canned responses and records the order of calls.
#[derive(Default)]
struct StubProvider {
    chart: MarketChart,
    ohlc: Vec<Candle>,
    fail_ohlc: bool,
    calls: Mutex<Vec<&'static str>>,
}

#[async_trait]
impl DataProvider for StubProvider {
    async fn fetch_market_chart(
        &self,
        _params: &MarketDataParams,
    ) -> Result<MarketChart, ProviderError> {
        self.calls.lock().unwrap().push("market_chart");
        Ok(self.chart.clone())
    }

    async fn fetch_ohlc(&self, _params: &MarketDataParams) -> Result<Vec<Candle>, ProviderError> {
        self.calls.lock().unwrap().push("ohlc");
        if self.fail_ohlc {
            return Err(RateLimitedSnafu.build());
        }
        Ok(self.ohlc.clone())
    }
}

fn params() -> MarketDataParams {
    MarketDataParams {
        coin_id: "bitcoin".into(),
        vs_currency: "usd".into(),
        days: 3,
    }
}

fn three_days() -> StubProvider {
    let prices = [100.0, 110.0, 90.0];
    let points = |scale: f64| {
        prices
            .iter()
            .enumerate()
            .map(|(i, p)| Point {
                timestamp_ms: JAN1 + i as i64 * DAY_MS,
                value: p * scale,
            })
            .collect::<Vec<_>>()
    };
    StubProvider {
        chart: MarketChart {
            prices: points(1.0),
            market_caps: points(1e7),
            total_volumes: points(1e3),
        },
        ohlc: (0..3)
            .map(|i| Candle {
                timestamp_ms: JAN1 + i * DAY_MS,
                open: 1.0,
                high: 2.0,
                low: 0.5,
                close: 1.5,
            })
            .collect(),
        ..StubProvider::default()
    }
}

#[tokio::test]
async fn fetches_chart_before_ohlc_and_joins() {
    let provider = three_days();
    let records = fetch_daily_records(&provider, &params(), &RequestPacer::new(Duration::ZERO))
        .await
        .unwrap();

    assert_eq!(*provider.calls.lock().unwrap(), ["market_chart", "ohlc"]);
    assert_eq!(records.len(), 3);
    assert_eq!(records[1].price, Some(110.0));
    assert_eq!(records[1].market_cap, Some(1.1e9));
    assert_eq!(records[2].close, Some(1.5));
}

#[tokio::test]
async fn empty_chart_is_an_error_and_skips_ohlc() {
    let provider = StubProvider::default();
    let err = fetch_daily_records(&provider, &params(), &RequestPacer::new(Duration::ZERO))
        .await
        .unwrap_err();

    assert!(matches!(err, IngestError::NoData { endpoint: "market_chart", .. }));
    assert_eq!(*provider.calls.lock().unwrap(), ["market_chart"]);
}

#[tokio::test]
async fn provider_failure_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let sink = CsvSink::new(tmp.path().join("coin_data"));
    let provider = StubProvider {
        fail_ohlc: true,
        ..three_days()
    };

    let err = ingest(&provider, &sink, &params(), &RequestPacer::new(Duration::ZERO))
        .await
        .unwrap_err();

    assert!(matches!(err, IngestError::Provider(ProviderError::RateLimited { .. })));
    assert!(!sink.path_for("bitcoin").exists());
}

#[tokio::test]
async fn written_csv_feeds_the_movement_labeler() {
    let tmp = tempfile::tempdir().unwrap();
    let sink = CsvSink::new(tmp.path());
    let path = ingest(&three_days(), &sink, &params(), &RequestPacer::new(Duration::ZERO))
        .await
        .unwrap();

    training_data::movement::label_file(&path, &path, "date", "price").unwrap();

    let body = std::fs::read_to_string(&path).unwrap();
    let labels: Vec<&str> = body
        .lines()
        .skip(1)
        .map(|line| line.rsplit(',').next().unwrap())
        .collect();
    assert_eq!(labels, ["1", "0", "N/A"]);
}

#[test]
fn api_error_display_carries_status() {
    let err: ProviderError = ApiSnafu {
        status: StatusCode::BAD_GATEWAY,
        message: "upstream down",
    }
    .build();
    assert!(err.to_string().contains("502"));
}
