//! Cursor-paged collection shared by every collector.
//!
//! A source hands out one [`Page`] per call. [`collect_pages`] keeps asking
//! for the next cursor until the cap is met, the source runs dry or a
//! request fails. Nothing is retried.

use async_trait::async_trait;
use shared_utils::pacing::RequestPacer;

use crate::providers::ProviderError;

/// One batch of results plus the cursor of the following batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
}

impl<T> Page<T> {
    pub fn last(items: Vec<T>) -> Self {
        Self { items, next: None }
    }
}

#[async_trait]
pub trait PagedSource {
    type Item: Send;

    /// Fetches the page at `cursor`; `None` is the first page.
    async fn fetch_page(&self, cursor: Option<&str>) -> Result<Page<Self::Item>, ProviderError>;
}

/// Why [`collect_pages`] stopped.
#[derive(Debug)]
pub enum StopReason {
    CapReached,
    /// Empty page, no next cursor, or a 404.
    Exhausted,
    /// A request failed; items gathered before it are kept.
    Failed(ProviderError),
}

#[derive(Debug)]
pub struct Collection<T> {
    pub items: Vec<T>,
    pub pages: usize,
    pub stop: StopReason,
}

/// Walks `source` page by page, waiting on `pacer` before every request.
///
/// `cap` bounds the number of items returned; `None` means no bound.
pub async fn collect_pages<S>(
    source: &S,
    cap: Option<usize>,
    pacer: &RequestPacer,
) -> Collection<S::Item>
where
    S: PagedSource + Sync + ?Sized,
{
    let cap = cap.unwrap_or(usize::MAX);
    let mut items = Vec::new();
    let mut pages = 0;
    let mut cursor: Option<String> = None;

    let stop = loop {
        if items.len() >= cap {
            break StopReason::CapReached;
        }
        pacer.wait().await;

        let page = match source.fetch_page(cursor.as_deref()).await {
            Ok(page) => page,
            Err(ProviderError::NotFound { message, .. }) => {
                tracing::info!(pages, %message, "source returned 404; treating as end of results");
                break StopReason::Exhausted;
            }
            Err(err) => {
                tracing::error!(
                    pages,
                    collected = items.len(),
                    error = %err,
                    "page request failed; stopping"
                );
                break StopReason::Failed(err);
            }
        };
        pages += 1;

        if page.items.is_empty() {
            break StopReason::Exhausted;
        }
        let room = cap - items.len();
        items.extend(page.items.into_iter().take(room));
        tracing::debug!(pages, collected = items.len(), "page collected");

        match page.next {
            Some(next) if items.len() < cap => cursor = Some(next),
            Some(_) => break StopReason::CapReached,
            None => break StopReason::Exhausted,
        }
    };

    Collection { items, pages, stop }
}
