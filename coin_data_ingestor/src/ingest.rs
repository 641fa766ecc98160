//! Fetch both endpoints, join them and hand the result to a sink.

use shared_utils::pacing::RequestPacer;

use crate::{
    errors::IngestError,
    io::sink::DataSink,
    join::join_daily,
    models::{daily_record::DailyRecord, request_params::MarketDataParams},
    providers::DataProvider,
};

/// Fetches the market chart then the OHLC candles, pacing each request, and joins them.
///
/// Either endpoint failing or returning no data is an error, so callers never
/// see a partial history.
pub async fn fetch_daily_records<P>(
    provider: &P,
    params: &MarketDataParams,
    pacer: &RequestPacer,
) -> Result<Vec<DailyRecord>, IngestError>
where
    P: DataProvider + Sync + ?Sized,
{
    pacer.wait().await;
    tracing::info!(coin = %params.coin_id, days = params.days, "fetching market chart");
    let chart = provider.fetch_market_chart(params).await?;
    if chart.is_empty() {
        return Err(IngestError::NoData {
            endpoint: "market_chart",
            coin_id: params.coin_id.clone(),
        });
    }

    pacer.wait().await;
    tracing::info!(coin = %params.coin_id, "fetching ohlc");
    let ohlc = provider.fetch_ohlc(params).await?;
    if ohlc.is_empty() {
        return Err(IngestError::NoData {
            endpoint: "ohlc",
            coin_id: params.coin_id.clone(),
        });
    }

    let records = join_daily(&chart, &ohlc);
    tracing::info!(
        prices = chart.prices.len(),
        candles = ohlc.len(),
        days = records.len(),
        "joined market data by day"
    );
    Ok(records)
}

/// [`fetch_daily_records`] followed by a single sink write.
pub async fn ingest<P, S>(
    provider: &P,
    sink: &S,
    params: &MarketDataParams,
    pacer: &RequestPacer,
) -> Result<S::Output, IngestError>
where
    P: DataProvider + Sync + ?Sized,
    S: DataSink + Sync,
{
    let records = fetch_daily_records(provider, params, pacer).await?;
    Ok(sink.write(&params.coin_id, &records).await?)
}
