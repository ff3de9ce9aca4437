//! Home-page preview grid
//!
//! The non-paginated variant of the feed: one fetch per mount, no sort
//! tabs, no cursor.

use std::sync::Arc;

use crate::domain::entities::Ui;
use crate::domain::ports::FeedSource;
use crate::error::FeedError;

/// Loader for the home gallery
pub struct HomeFeed<S: FeedSource> {
    source: Arc<S>,
}

impl<S: FeedSource> HomeFeed<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Fetch the preview grid once
    pub async fn load(&self) -> Result<Vec<Ui>, FeedError> {
        let items = self.source.fetch_home().await?;
        tracing::debug!(count = items.len(), "loaded home grid");
        Ok(items)
    }
}
