//! Twitter collection: page through recent search up to `max_tweets`.

use shared_utils::pacing::RequestPacer;

use crate::{
    config::TwitterConfig,
    models::tweet::Tweet,
    paging::{Collection, PagedSource, StopReason, collect_pages},
};

/// Collects tweets from `source`, stopping at `config.max_tweets`.
pub async fn collect_tweets<S>(
    source: &S,
    config: &TwitterConfig,
    pacer: &RequestPacer,
) -> Collection<Tweet>
where
    S: PagedSource<Item = Tweet> + Sync + ?Sized,
{
    tracing::info!(query = %config.query, max = config.max_tweets, "collecting tweets");
    let collection = collect_pages(source, Some(config.max_tweets), pacer).await;
    match &collection.stop {
        StopReason::CapReached => {
            tracing::info!(tweets = collection.items.len(), "reached tweet cap")
        }
        StopReason::Exhausted => tracing::info!(tweets = collection.items.len(), "no more pages"),
        StopReason::Failed(err) => tracing::warn!(
            tweets = collection.items.len(),
            error = %err,
            "search stopped early; keeping tweets collected so far"
        ),
    }
    collection
}
