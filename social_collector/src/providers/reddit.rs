//! Reddit OAuth API: subreddit search and comment trees.

pub mod client;
pub mod response;

use async_trait::async_trait;

pub use client::RedditClient;
pub use response::Submission;

use crate::{paging::Page, providers::ProviderError};

/// One subreddit search, as sent to `/r/{subreddit}/search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub subreddit: String,
    pub keyword: String,
    pub sort: String,
    pub time_filter: String,
}

/// The two Reddit calls the collector needs.
#[async_trait]
pub trait RedditApi {
    /// One page of search results restricted to `query.subreddit`.
    async fn search_page(
        &self,
        query: &SearchQuery,
        after: Option<&str>,
    ) -> Result<Page<Submission>, ProviderError>;

    /// Bodies of the first `limit` top-level comments of a post, in Reddit's default order.
    async fn top_comments(
        &self,
        subreddit: &str,
        post_id: &str,
        limit: usize,
    ) -> Result<Vec<String>, ProviderError>;
}
