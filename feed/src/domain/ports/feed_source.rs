//! Feed source port trait
//!
//! The remote data retrieval behind the galleries. The ordering and
//! ranking semantics live entirely on the backend; this port only carries
//! the query parameters across.

use async_trait::async_trait;

use crate::domain::entities::{SortMode, TimeRange, Ui};
use crate::error::SourceError;

/// Port trait for fetching gallery pages
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch one page of the explore feed.
    ///
    /// Returns between 0 and `limit` cards in the backend's order. An empty
    /// page means the feed is exhausted for this query.
    async fn fetch_page(
        &self,
        sort_mode: SortMode,
        offset: usize,
        limit: usize,
        time_range: TimeRange,
    ) -> Result<Vec<Ui>, SourceError>;

    /// Fetch the home-page preview grid (no pagination)
    async fn fetch_home(&self) -> Result<Vec<Ui>, SourceError>;
}
