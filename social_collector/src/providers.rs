//! HTTP clients for the social APIs and their shared error types.

pub mod reddit;
pub mod twitter;

use reqwest::StatusCode;
use shared_utils::env::MissingEnvVarError;
use snafu::{Backtrace, Snafu};

/// Errors that can occur during the creation of a client
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

    /// Token contains characters not allowed in a header.
    #[snafu(display("Invalid API token format: {source}"))]
    InvalidApiKey {
        source: reqwest::header::InvalidHeaderValue,
        backtrace: Backtrace,
    },
}

/// Errors returned by a single API request.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    #[snafu(display("API request failed: {source}"))]
    Reqwest {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// HTTP 401.
    #[snafu(display("Unauthorized: credentials are missing, invalid or lack permission"))]
    Unauthorized { backtrace: Backtrace },

    /// HTTP 404. Paging treats this as the end of the results.
    #[snafu(display("Not found: {message}"))]
    NotFound { message: String, backtrace: Backtrace },

    /// HTTP 429.
    #[snafu(display("Rate limited: wait before retrying or raise the request delay"))]
    RateLimited { backtrace: Backtrace },

    #[snafu(display("API error ({status}): {message}"))]
    Api {
        status: StatusCode,
        message: String,
        backtrace: Backtrace,
    },

    #[snafu(display("Client initialization error: {source}"))]
    Init {
        #[snafu(backtrace)]
        source: ProviderInitError,
    },
}

/// Maps a non-success response onto [`ProviderError`], consuming its body as the message.
pub(crate) async fn error_for_status(response: reqwest::Response) -> ProviderError {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return UnauthorizedSnafu.build();
    }
    if status == StatusCode::TOO_MANY_REQUESTS {
        return RateLimitedSnafu.build();
    }
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown API error".to_string());
    if status == StatusCode::NOT_FOUND {
        NotFoundSnafu { message }.build()
    } else {
        ApiSnafu { status, message }.build()
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
            .get(format!("http://{addr}/search"))
            .send()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn classifies_unauthorized_and_rate_limit() {
        let err = error_for_status(respond_with("401 Unauthorized", "").await).await;
        assert!(matches!(err, ProviderError::Unauthorized { .. }));

        let err = error_for_status(respond_with("429 Too Many Requests", "").await).await;
        assert!(matches!(err, ProviderError::RateLimited { .. }));
    }

    #[tokio::test]
    async fn not_found_carries_body() {
        let err = error_for_status(respond_with("404 Not Found", "no such page").await).await;
        assert!(matches!(
            err,
            ProviderError::NotFound { ref message, .. } if message == "no such page"
        ));
    }

    #[tokio::test]
    async fn other_statuses_are_api_errors() {
        let err = error_for_status(respond_with("403 Forbidden", "private").await).await;
        assert!(matches!(
            err,
            ProviderError::Api { status, ref message, .. }
                if status == StatusCode::FORBIDDEN && message == "private"
        ));
    }
}
