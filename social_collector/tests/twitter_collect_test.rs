use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use secrecy::SecretString;
use serial_test::serial;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use shared_utils::{pacing::RequestPacer, table::Table};
use social_collector::{
    config::TwitterConfig,
    models::tweet::Tweet,
    output::write_twitter_csv,
    paging::{Page, PagedSource, StopReason},
    providers::{ProviderError, ProviderInitError, twitter::TwitterClient},
    twitter::collect_tweets,
};

/// Endless feed of 20-tweet pages.
struct Feed;

fn tweet(n: usize) -> Tweet {
    Tweet {
        id: n.to_string(),
        user_name: format!("user{n}"),
        text: "to the moon".into(),
        created_at: Utc.with_ymd_and_hms(2024, 9, 17, 8, 0, 0).unwrap(),
        reply_count: 0,
        view_count: Some(10),
        favorite_count: n as u64,
        followers_count: 100,
        hashtags: vec![],
        media: None,
    }
}

#[async_trait]
impl PagedSource for Feed {
    type Item = Tweet;

    async fn fetch_page(&self, cursor: Option<&str>) -> Result<Page<Tweet>, ProviderError> {
        let page: usize = cursor.map_or(0, |c| c.parse().unwrap());
        Ok(Page {
            items: (page * 20..page * 20 + 20).map(tweet).collect(),
            next: Some((page + 1).to_string()),
        })
    }
}

#[tokio::test]
async fn stops_at_max_tweets_and_writes_csv() {
    let cfg = TwitterConfig {
        max_tweets: 45,
        ..TwitterConfig::default()
    };
    let got = collect_tweets(&Feed, &cfg, &RequestPacer::new(Duration::ZERO)).await;
    assert_eq!(got.items.len(), 45);
    assert_eq!(got.pages, 3);
    assert!(matches!(got.stop, StopReason::CapReached));

    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("twitter_data/bitcoin_twitter_data.csv");
    write_twitter_csv(&path, &got.items).unwrap();

    let table = Table::read_csv(&path).unwrap();
    assert_eq!(table.len(), 45);
    let idx = table.column_index("tweet_created_at").unwrap();
    assert_eq!(table.rows()[0][idx], "Tue Sep 17 08:00:00 +0000 2024");
}

/// Answers a single request with `status_line` and `body`; returns the base URL.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let reply = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\n\
             content-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(reply.as_bytes()).await.unwrap();
    });
    format!("http://{addr}")
}

fn client_for(base_url: String) -> (TwitterClient, TwitterConfig) {
    let cfg = TwitterConfig {
        base_url,
        ..TwitterConfig::default()
    };
    let client = TwitterClient::with_token(&cfg, SecretString::new("token".into())).unwrap();
    (client, cfg)
}

#[tokio::test]
async fn search_404_ends_collection_as_exhausted() {
    let (client, cfg) = client_for(serve_once("404 Not Found", r#"{"title":"Not Found"}"#).await);
    let got = collect_tweets(&client, &cfg, &RequestPacer::new(Duration::ZERO)).await;
    assert!(got.items.is_empty());
    assert!(matches!(got.stop, StopReason::Exhausted));
}

#[tokio::test]
async fn search_server_error_is_a_failure() {
    let (client, cfg) = client_for(serve_once("503 Service Unavailable", "{}").await);
    let got = collect_tweets(&client, &cfg, &RequestPacer::new(Duration::ZERO)).await;
    assert!(matches!(
        got.stop,
        StopReason::Failed(ProviderError::Api { status, .. }) if status.as_u16() == 503
    ));
}

#[tokio::test]
async fn search_401_is_unauthorized() {
    let (client, cfg) = client_for(serve_once("401 Unauthorized", "").await);
    let got = collect_tweets(&client, &cfg, &RequestPacer::new(Duration::ZERO)).await;
    assert!(matches!(got.stop, StopReason::Failed(ProviderError::Unauthorized { .. })));
}

#[test]
#[serial]
fn missing_bearer_token_is_an_init_error() {
    unsafe { std::env::remove_var("TWITTER_BEARER_TOKEN") };
    let err = TwitterClient::new(&TwitterConfig::default()).err().unwrap();
    assert!(matches!(err, ProviderInitError::MissingEnvVar { .. }));
}

#[tokio::test]
#[serial]
#[ignore]
async fn test_twitter_recent_search_live() {
    // Requires TWITTER_BEARER_TOKEN in the environment or a .env file.
    dotenvy::dotenv().ok();
    if std::env::var("TWITTER_BEARER_TOKEN").is_err() {
        println!("Skipping test_twitter_recent_search_live: TWITTER_BEARER_TOKEN not set.");
        return;
    }

    let cfg = TwitterConfig {
        max_tweets: 10,
        page_size: 10,
        ..TwitterConfig::default()
    };
    let client = TwitterClient::new(&cfg).expect("Failed to create TwitterClient");
    let got = collect_tweets(&client, &cfg, &RequestPacer::new(Duration::ZERO)).await;
    assert!(!matches!(got.stop, StopReason::Failed(_)), "search failed: {:?}", got.stop);
    assert!(got.items.len() <= 10);
}
