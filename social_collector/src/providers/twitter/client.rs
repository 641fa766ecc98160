use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use reqwest::{Client, header};
use secrecy::{ExposeSecret, SecretString};
use shared_utils::env::get_env_var;
use snafu::ResultExt;

use crate::{
    config::TwitterConfig,
    models::tweet::Tweet,
    paging::{Page, PagedSource},
    providers::{
        ClientBuildSnafu, InvalidApiKeySnafu, MissingEnvVarSnafu, ProviderError, ProviderInitError,
        ReqwestSnafu,
        error_for_status, twitter::response::SearchResponse,
    },
};

const TWEET_FIELDS: &str = "created_at,public_metrics,entities,attachments,author_id";
const EXPANSIONS: &str = "author_id,attachments.media_keys";
const USER_FIELDS: &str = "name,public_metrics";
const MEDIA_FIELDS: &str = "type,url";

/// Recent-search client authenticated with an app bearer token.
pub struct TwitterClient {
    client: Client,
    search_url: String,
    query: String,
    page_size: u32,
    start_time: Option<String>,
    end_time: Option<String>,
}

/// Midnight UTC at the start of `day`, RFC 3339.
fn day_start(day: NaiveDate) -> String {
    format!("{day}T00:00:00Z")
}

impl TwitterClient {
    /// Creates a new client.
    ///
    /// Reads the bearer token from the `TWITTER_BEARER_TOKEN` environment variable.
    pub fn new(config: &TwitterConfig) -> Result<Self, ProviderInitError> {
        let token = get_env_var("TWITTER_BEARER_TOKEN").context(MissingEnvVarSnafu)?;
        Self::with_token(config, SecretString::new(token.into()))
    }

    pub fn with_token(
        config: &TwitterConfig,
        token: SecretString,
    ) -> Result<Self, ProviderInitError> {
        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .context(InvalidApiKeySnafu)?;
        auth.set_sensitive(true);
        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self {
            client,
            search_url: format!("{}/tweets/search/recent", config.base_url.trim_end_matches('/')),
            query: config.query.clone(),
            page_size: config.page_size.clamp(10, 100),
            start_time: config.since.map(day_start),
            end_time: config
                .until
                .and_then(|d| d.succ_opt())
                .filter(|next| *next <= Utc::now().date_naive())
                .map(day_start),
        })
    }

    fn query_params<'a>(
        &'a self,
        page_size: &'a str,
        next_token: Option<&'a str>,
    ) -> Vec<(&'static str, &'a str)> {
        let mut params = vec![
            ("query", self.query.as_str()),
            ("max_results", page_size),
            ("tweet.fields", TWEET_FIELDS),
            ("expansions", EXPANSIONS),
            ("user.fields", USER_FIELDS),
            ("media.fields", MEDIA_FIELDS),
        ];
        if let Some(start) = &self.start_time {
            params.push(("start_time", start.as_str()));
        }
        if let Some(end) = &self.end_time {
            params.push(("end_time", end.as_str()));
        }
        if let Some(token) = next_token {
            params.push(("next_token", token));
        }
        params
    }
}

#[async_trait]
impl PagedSource for TwitterClient {
    type Item = Tweet;

    async fn fetch_page(&self, cursor: Option<&str>) -> Result<Page<Tweet>, ProviderError> {
        let page_size = self.page_size.to_string();
        let params = self.query_params(&page_size, cursor);
        tracing::debug!(query = %self.query, ?cursor, "searching tweets");

        let response = self
            .client
            .get(&self.search_url)
            .query(&params)
            .send()
            .await
            .context(ReqwestSnafu)?;
        if !response.status().is_success() {
            return Err(error_for_status(response).await);
        }
        let body: SearchResponse = response.json().await.context(ReqwestSnafu)?;
        let next = body.meta.next_token.clone();
        Ok(Page {
            items: body.into_tweets(),
            next,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn until_is_inclusive_of_the_whole_day() {
        let cfg = TwitterConfig {
            since: NaiveDate::from_ymd_opt(2024, 9, 10),
            until: NaiveDate::from_ymd_opt(2024, 9, 12),
            page_size: 500,
            ..TwitterConfig::default()
        };
        let client = TwitterClient::with_token(&cfg, SecretString::new("t".into())).unwrap();
        assert_eq!(client.page_size, 100);

        let params = client.query_params("100", Some("tok"));
        assert!(params.contains(&("start_time", "2024-09-10T00:00:00Z")));
        assert!(params.contains(&("end_time", "2024-09-13T00:00:00Z")));
        assert!(params.contains(&("next_token", "tok")));
    }

    #[test]
    fn token_with_newline_is_rejected() {
        let token = SecretString::new("bad\ntoken".into());
        let err = TwitterClient::with_token(&TwitterConfig::default(), token).err().unwrap();
        assert!(matches!(err, ProviderInitError::InvalidApiKey { .. }));
    }
}
