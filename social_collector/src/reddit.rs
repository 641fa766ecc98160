//! Reddit collection: search every configured subreddit, then attach top comments.

use async_trait::async_trait;
use indexmap::IndexMap;
use shared_utils::pacing::RequestPacer;

use crate::{
    config::RedditConfig,
    models::reddit_post::{RedditPost, flatten_text},
    paging::{Page, PagedSource, StopReason, collect_pages},
    providers::{
        ProviderError,
        reddit::{RedditApi, SearchQuery, Submission},
    },
};

/// Adapts one subreddit search to the paging engine.
pub struct SubredditSearch<'a, A: ?Sized> {
    api: &'a A,
    query: SearchQuery,
}

impl<'a, A: ?Sized> SubredditSearch<'a, A> {
    pub fn new(api: &'a A, query: SearchQuery) -> Self {
        Self { api, query }
    }
}

#[async_trait]
impl<A> PagedSource for SubredditSearch<'_, A>
where
    A: RedditApi + Sync + ?Sized,
{
    type Item = Submission;

    async fn fetch_page(&self, cursor: Option<&str>) -> Result<Page<Submission>, ProviderError> {
        self.api.search_page(&self.query, cursor).await
    }
}

/// Posts gathered across subreddits.
#[derive(Debug, Default)]
pub struct RedditCollection {
    pub posts: Vec<RedditPost>,
    /// Posts kept per subreddit, in configured order.
    pub per_subreddit: IndexMap<String, usize>,
    /// Subreddits whose search stopped on an error.
    pub failed: Vec<String>,
}

/// Searches each subreddit in turn and builds [`RedditPost`]s with their top comments.
///
/// A failing subreddit keeps whatever it returned before the error and the
/// next one is tried. A failed comment request leaves that post's comments
/// empty. Every request waits on `pacer` first.
pub async fn collect_posts<A>(
    api: &A,
    config: &RedditConfig,
    pacer: &RequestPacer,
) -> RedditCollection
where
    A: RedditApi + Sync + ?Sized,
{
    let mut out = RedditCollection::default();

    for subreddit in &config.subreddits {
        tracing::info!(subreddit = %subreddit, keyword = %config.keyword, "searching subreddit");
        let search = SubredditSearch::new(
            api,
            SearchQuery {
                subreddit: subreddit.clone(),
                keyword: config.keyword.clone(),
                sort: config.sort.clone(),
                time_filter: config.time_filter.clone(),
            },
        );
        let found = collect_pages(&search, config.limit, pacer).await;
        if let StopReason::Failed(err) = &found.stop {
            tracing::warn!(
                subreddit = %subreddit,
                error = %err,
                kept = found.items.len(),
                "subreddit search failed; moving on"
            );
            out.failed.push(subreddit.clone());
        }

        let mut kept = 0;
        for submission in found.items {
            let Some(date) = submission.created_day() else {
                tracing::warn!(id = %submission.id, "post has an invalid timestamp; skipped");
                continue;
            };
            if !config.in_window(date) {
                continue;
            }

            let comments = if config.comments == 0 {
                Vec::new()
            } else {
                pacer.wait().await;
                match api.top_comments(subreddit, &submission.id, config.comments).await {
                    Ok(comments) => comments.iter().map(|c| flatten_text(c)).collect(),
                    Err(err) => {
                        tracing::warn!(
                            id = %submission.id,
                            error = %err,
                            "could not fetch comments"
                        );
                        Vec::new()
                    }
                }
            };
            tracing::debug!(title = %submission.title, %date, "post collected");

            out.posts.push(RedditPost {
                subreddit: subreddit.clone(),
                title: submission.title,
                url: submission.url,
                date,
                score: submission.score,
                description: flatten_text(&submission.selftext),
                comments,
            });
            kept += 1;
        }
        out.per_subreddit.insert(subreddit.clone(), kept);
    }

    tracing::info!(
        posts = out.posts.len(),
        failed = out.failed.len(),
        "reddit collection finished"
    );
    out
}
