//! Configuration for the `social-collector` binary.
//!
//! Credentials never live here; they are read from the environment when a
//! client is created.

use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollectorConfig {
    pub reddit: RedditConfig,
    pub twitter: TwitterConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RedditConfig {
    pub subreddits: Vec<String>,
    pub keyword: String,
    /// `relevance`, `hot`, `top`, `new` or `comments`.
    pub sort: String,
    /// `hour`, `day`, `week`, `month`, `year` or `all`.
    pub time_filter: String,
    /// Per-subreddit post cap; `None` walks every page Reddit returns.
    pub limit: Option<usize>,
    /// Top-level comments kept per post; the CSV always has this many comment columns.
    pub comments: usize,
    /// Inclusive UTC day bounds applied after the search.
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
    pub user_agent: String,
    pub request_delay_secs: u64,
    pub timeout_secs: u64,
    pub output: PathBuf,
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            subreddits: [
                "CryptoCurrency",
                "CryptoMarkets",
                "CryptoMoonShots",
                "Altcoin",
                "MemeCoins",
            ]
            .map(String::from)
            .to_vec(),
            keyword: "bitcoin".to_string(),
            sort: "relevance".to_string(),
            time_filter: "year".to_string(),
            limit: None,
            comments: 5,
            since: None,
            until: None,
            user_agent: concat!("social-collector/", env!("CARGO_PKG_VERSION")).to_string(),
            request_delay_secs: 2,
            timeout_secs: 30,
            output: PathBuf::from("reddit_data/bitcoin_reddit_data.csv"),
        }
    }
}

impl RedditConfig {
    pub fn request_delay(&self) -> Duration {
        Duration::from_secs(self.request_delay_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Whether `day` lies inside the optional `since..=until` window.
    pub fn in_window(&self, day: NaiveDate) -> bool {
        self.since.is_none_or(|since| day >= since) && self.until.is_none_or(|until| day <= until)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TwitterConfig {
    pub query: String,
    /// Results per request, 10 to 100.
    pub page_size: u32,
    pub max_tweets: usize,
    /// Inclusive UTC day bounds sent to the API. Recent search only reaches back seven days.
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
    pub request_delay_secs: u64,
    pub timeout_secs: u64,
    pub base_url: String,
    pub output: PathBuf,
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            query: "#bitcoin".to_string(),
            page_size: 20,
            max_tweets: 800,
            since: None,
            until: None,
            request_delay_secs: 2,
            timeout_secs: 30,
            base_url: "https://api.twitter.com/2".to_string(),
            output: PathBuf::from("twitter_data/bitcoin_twitter_data.csv"),
        }
    }
}

impl TwitterConfig {
    pub fn request_delay(&self) -> Duration {
        Duration::from_secs(self.request_delay_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
