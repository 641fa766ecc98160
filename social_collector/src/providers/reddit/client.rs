use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use shared_utils::env::get_env_var;
use snafu::ResultExt;

use crate::{
    config::RedditConfig,
    paging::Page,
    providers::{
        ClientBuildSnafu, InitSnafu, MissingEnvVarSnafu, ProviderError, ReqwestSnafu,
        error_for_status,
        reddit::{
            RedditApi, SearchQuery,
            response::{CommentsResponse, Listing, Submission, TokenResponse},
        },
    },
};

pub const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
pub const API_BASE: &str = "https://oauth.reddit.com";
/// Largest page Reddit serves.
const PAGE_LIMIT: &str = "100";

/// Application-only OAuth client.
pub struct RedditClient {
    client: Client,
    token: SecretString,
}

impl RedditClient {
    /// Exchanges `REDDIT_CLIENT_ID` / `REDDIT_CLIENT_SECRET` for an app token.
    pub async fn connect(config: &RedditConfig) -> Result<Self, ProviderError> {
        let client_id = get_env_var("REDDIT_CLIENT_ID")
            .context(MissingEnvVarSnafu)
            .context(InitSnafu)?;
        let client_secret = SecretString::new(
            get_env_var("REDDIT_CLIENT_SECRET")
                .context(MissingEnvVarSnafu)
                .context(InitSnafu)?
                .into(),
        );

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .context(ClientBuildSnafu)
            .context(InitSnafu)?;

        let response = client
            .post(TOKEN_URL)
            .basic_auth(&client_id, Some(client_secret.expose_secret()))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .context(ReqwestSnafu)?;
        if !response.status().is_success() {
            return Err(error_for_status(response).await);
        }
        let token: TokenResponse = response.json().await.context(ReqwestSnafu)?;
        tracing::info!(expires_in = token.expires_in, "reddit app token acquired");

        Ok(Self {
            client,
            token: SecretString::new(token.access_token.into()),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let url = format!("{API_BASE}{path}");
        tracing::debug!(%url, "requesting");
        let response = self
            .client
            .get(&url)
            .bearer_auth(self.token.expose_secret())
            .query(query)
            .query(&[("raw_json", "1")])
            .send()
            .await
            .context(ReqwestSnafu)?;
        if !response.status().is_success() {
            return Err(error_for_status(response).await);
        }
        response.json::<T>().await.context(ReqwestSnafu)
    }
}

#[async_trait]
impl RedditApi for RedditClient {
    async fn search_page(
        &self,
        query: &SearchQuery,
        after: Option<&str>,
    ) -> Result<Page<Submission>, ProviderError> {
        let mut params = vec![
            ("q", query.keyword.as_str()),
            ("restrict_sr", "1"),
            ("type", "link"),
            ("sort", query.sort.as_str()),
            ("t", query.time_filter.as_str()),
            ("limit", PAGE_LIMIT),
        ];
        if let Some(after) = after {
            params.push(("after", after));
        }

        let listing: Listing<Submission> = self
            .get_json(&format!("/r/{}/search", query.subreddit), &params)
            .await?;
        Ok(Page {
            items: listing.data.children.into_iter().map(|thing| thing.data).collect(),
            next: listing.data.after,
        })
    }

    async fn top_comments(
        &self,
        subreddit: &str,
        post_id: &str,
        limit: usize,
    ) -> Result<Vec<String>, ProviderError> {
        let limit_param = limit.to_string();
        let (_, comments): CommentsResponse = self
            .get_json(
                &format!("/r/{subreddit}/comments/{post_id}"),
                &[("limit", limit_param.as_str()), ("depth", "1")],
            )
            .await?;
        Ok(comments
            .data
            .children
            .into_iter()
            .filter(|thing| thing.kind == "t1")
            .filter_map(|thing| thing.data.body)
            .take(limit)
            .collect())
    }
}
