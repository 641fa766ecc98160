//! Provider abstraction for coin market data.
//!
//! [`DataProvider`] is the seam between the ingest flow and a concrete vendor
//! API. Each vendor module converts its wire format into the canonical
//! [`MarketChart`] and [`Candle`] models.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use coin_data_ingestor::models::{
//!     market_chart::{Candle, MarketChart},
//!     request_params::MarketDataParams,
//! };
//! use coin_data_ingestor::providers::{DataProvider, ProviderError};
//!
//! struct EmptyProvider;
//!
//! #[async_trait]
//! impl DataProvider for EmptyProvider {
//!     async fn fetch_market_chart(
//!         &self,
//!         _params: &MarketDataParams,
//!     ) -> Result<MarketChart, ProviderError> {
//!         Ok(MarketChart::default())
//!     }
//!
//!     async fn fetch_ohlc(
//!         &self,
//!         _params: &MarketDataParams,
//!     ) -> Result<Vec<Candle>, ProviderError> {
//!         Ok(vec![])
//!     }
//! }
//! ```

pub mod coingecko;

use async_trait::async_trait;
use reqwest::StatusCode;
use shared_utils::env::MissingEnvVarError;
use snafu::{Backtrace, Snafu};

use crate::models::{
    market_chart::{Candle, MarketChart},
    request_params::MarketDataParams,
};

/// Fetches daily market history for one coin.
#[async_trait]
pub trait DataProvider {
    /// Price, market cap and volume series over `params.days`.
    async fn fetch_market_chart(
        &self,
        params: &MarketDataParams,
    ) -> Result<MarketChart, ProviderError>;

    /// OHLC candles over `params.days`.
    async fn fetch_ohlc(&self, params: &MarketDataParams) -> Result<Vec<Candle>, ProviderError>;
}

/// Errors that can occur during the creation of a provider instance
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// missed environment variable.
    #[snafu(display("Missing environment variable: {source}"))]
    MissingEnvVar {
        source: MissingEnvVarError,
        backtrace: Backtrace,
    },

    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },
}

/// Errors that can occur within a `DataProvider` implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// Network failure, timeout or undecodable body.
    #[snafu(display("API request failed: {source}"))]
    Reqwest {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// HTTP 401.
    #[snafu(display("Unauthorized: the API key is missing, invalid or lacks permission"))]
    Unauthorized { backtrace: Backtrace },

    /// HTTP 429.
    #[snafu(display("Rate limited: wait before retrying or raise the request delay"))]
    RateLimited { backtrace: Backtrace },

    /// Any other non-success status.
    #[snafu(display("API error ({status}): {message}"))]
    Api {
        status: StatusCode,
        message: String,
        backtrace: Backtrace,
    },
}

/// Maps a non-success response onto [`ProviderError`], consuming its body as the message.
pub(crate) async fn error_for_status(response: reqwest::Response) -> ProviderError {
    let status = response.status();
    match status {
        StatusCode::UNAUTHORIZED => UnauthorizedSnafu.build(),
        StatusCode::TOO_MANY_REQUESTS => RateLimitedSnafu.build(),
        _ => {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            ApiSnafu { status, message }.build()
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Serves one canned HTTP response on a local port and returns what reqwest made of it.
    async fn respond_with(status_line: &str, body: &str) -> reqwest::Response {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let reply = format!(
            "HTTP/1.1 {status_line}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            socket.write_all(reply.as_bytes()).await.unwrap();
        });
        reqwest::Client::builder()
            .no_proxy()
            .build()
            .unwrap()
            .get(format!("http://{addr}/coins/bitcoin/ohlc"))
            .send()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn classifies_unauthorized() {
        let err = error_for_status(respond_with("401 Unauthorized", "").await).await;
        assert!(matches!(err, ProviderError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn classifies_rate_limit() {
        let err = error_for_status(respond_with("429 Too Many Requests", "slow down").await).await;
        assert!(matches!(err, ProviderError::RateLimited { .. }));
    }

    #[tokio::test]
    async fn other_statuses_keep_status_and_body() {
        let err = error_for_status(respond_with("404 Not Found", "coin not found").await).await;
        match err {
            ProviderError::Api { status, message, .. } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(message, "coin not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = error_for_status(respond_with("500 Internal Server Error", "").await).await;
        assert!(matches!(
            err,
            ProviderError::Api { status, .. } if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
    }
}
