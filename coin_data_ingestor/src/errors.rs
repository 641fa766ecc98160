use thiserror::Error;

use crate::io::sink::SinkError;
use crate::providers::ProviderError;

/// Errors of a full fetch-join-write run.
#[derive(Debug, Error)]
pub enum IngestError {
    /// A provider call failed; nothing is written.
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// One of the two endpoints answered without any data points.
    #[error("No {endpoint} data returned for {coin_id}")]
    NoData { endpoint: &'static str, coin_id: String },

    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),
}
