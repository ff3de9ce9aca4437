//! Explore feed controller
//!
//! Owns the pagination cursor, sort mode, time-range filter and the
//! accumulated card list, and drives incremental fetches against a
//! `FeedSource`. Fetches may resolve out of order; every fetch is tagged
//! with the generation it was issued under, and responses whose generation
//! has been superseded by a reset are discarded so the latest user intent
//! always wins.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::entities::{FeedQuery, SortMode, TimeRange, Ui};
use crate::domain::ports::FeedSource;
use crate::error::FeedError;

/// Cards fetched per page
pub const PAGE_SIZE: usize = 9;

/// Distance from the bottom of the document, in pixels, at which scrolling
/// requests the next page
pub const SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Viewport position reported by the scroll listener
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// How far the viewport has scrolled from the top
    pub scroll_offset: f64,
    pub viewport_height: f64,
    /// Total height of the scrollable document
    pub content_height: f64,
}

impl ScrollMetrics {
    /// Whether the viewport bottom is within `threshold` pixels of the
    /// document bottom
    pub fn near_bottom(&self, threshold: f64) -> bool {
        self.scroll_offset + self.viewport_height >= self.content_height - threshold
    }
}

/// Read-only view of the controller for the rendering layer
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    /// Accumulated cards, arrival order
    pub items: Vec<Ui>,
    pub sort_mode: SortMode,
    pub time_range: TimeRange,
    pub loading: bool,
    pub exhausted: bool,
    /// Retryable failure message from the last fetch, if it failed
    pub error: Option<String>,
}

#[derive(Debug, Default)]
struct FeedState {
    query: FeedQuery,
    items: Vec<Ui>,
    loading: bool,
    exhausted: bool,
    last_error: Option<String>,
    /// Bumped on every reset; in-flight fetches carry the generation they
    /// were issued under and are discarded on mismatch
    generation: u64,
}

/// Controller for the paginated explore feed
pub struct FeedController<S: FeedSource> {
    source: Arc<S>,
    page_size: usize,
    state: RwLock<FeedState>,
}

impl<S: FeedSource> FeedController<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self::with_page_size(source, PAGE_SIZE)
    }

    pub fn with_page_size(source: Arc<S>, page_size: usize) -> Self {
        Self {
            source,
            page_size,
            state: RwLock::new(FeedState::default()),
        }
    }

    /// Mount-time fetch of the first page for the default query
    pub async fn load(&self) -> Result<(), FeedError> {
        let (generation, query) = self.begin_reset(|_| {});
        self.run_fetch(generation, query).await
    }

    /// Switch the sort tab: clears the list, resets the cursor and fetches
    /// the first page under the new mode
    pub async fn set_sort_mode(&self, mode: SortMode) -> Result<(), FeedError> {
        let (generation, query) = self.begin_reset(|q| q.sort_mode = mode);
        self.run_fetch(generation, query).await
    }

    /// Change the ranking time window: same reset contract as
    /// `set_sort_mode`. Only reachable from the UI when the sort mode is
    /// not `latest`, but the controller applies it unconditionally.
    pub async fn set_time_range(&self, range: TimeRange) -> Result<(), FeedError> {
        let (generation, query) = self.begin_reset(|q| q.time_range = range);
        self.run_fetch(generation, query).await
    }

    /// Request the next page.
    ///
    /// Safe to call spuriously: while a fetch is in flight, or once the
    /// feed is exhausted, this is a no-op returning `Ok(false)`.
    pub async fn request_more(&self) -> Result<bool, FeedError> {
        let (generation, query) = {
            let mut state = self.write_state();
            if state.loading || state.exhausted {
                return Ok(false);
            }
            state.query.offset += self.page_size;
            state.loading = true;
            (state.generation, state.query)
        };
        self.run_fetch(generation, query).await?;
        Ok(true)
    }

    /// Re-issue the fetch for the current query after a failure.
    ///
    /// Supersedes any in-flight fetch; a no-op while one is loading.
    pub async fn retry(&self) -> Result<bool, FeedError> {
        let (generation, query) = {
            let mut state = self.write_state();
            if state.loading {
                return Ok(false);
            }
            state.last_error = None;
            state.generation += 1;
            state.loading = true;
            (state.generation, state.query)
        };
        self.run_fetch(generation, query).await?;
        Ok(true)
    }

    /// Level-triggered scroll hook: fetches the next page when the
    /// viewport is within `SCROLL_THRESHOLD_PX` of the document bottom.
    pub async fn on_scroll(&self, metrics: ScrollMetrics) -> Result<bool, FeedError> {
        if !metrics.near_bottom(SCROLL_THRESHOLD_PX) {
            return Ok(false);
        }
        self.request_more().await
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        let state = self.read_state();
        FeedSnapshot {
            items: state.items.clone(),
            sort_mode: state.query.sort_mode,
            time_range: state.query.time_range,
            loading: state.loading,
            exhausted: state.exhausted,
            error: state.last_error.clone(),
        }
    }

    pub fn query(&self) -> FeedQuery {
        self.read_state().query
    }

    pub fn is_loading(&self) -> bool {
        self.read_state().loading
    }

    pub fn is_exhausted(&self) -> bool {
        self.read_state().exhausted
    }

    /// Clear the accumulated state, apply a query change and mark a fresh
    /// generation as loading. Returns the tag the caller fetches under.
    fn begin_reset(&self, apply: impl FnOnce(&mut FeedQuery)) -> (u64, FeedQuery) {
        let mut state = self.write_state();
        state.items.clear();
        state.exhausted = false;
        state.last_error = None;
        state.query.offset = 0;
        apply(&mut state.query);
        state.generation += 1;
        state.loading = true;
        (state.generation, state.query)
    }

    async fn run_fetch(&self, generation: u64, query: FeedQuery) -> Result<(), FeedError> {
        tracing::debug!(
            sort = %query.sort_mode,
            range = %query.time_range,
            offset = query.offset,
            "fetching feed page"
        );

        // The lock is never held across this await.
        let result = self
            .source
            .fetch_page(query.sort_mode, query.offset, self.page_size, query.time_range)
            .await;

        let mut state = self.write_state();
        if state.generation != generation {
            // A reset superseded this fetch; the newer fetch owns the
            // loading flag and the list.
            tracing::debug!(
                stale = generation,
                current = state.generation,
                "discarding stale feed response"
            );
            return Ok(());
        }

        match result {
            Ok(page) => {
                // Only a zero-length page exhausts the feed; a short page
                // just means the next request will come back empty.
                if page.is_empty() {
                    state.exhausted = true;
                }
                if query.offset == 0 {
                    state.items = page;
                } else {
                    state.items.extend(page);
                }
                state.loading = false;
                state.last_error = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("feed fetch failed: {}", e);
                state.loading = false;
                state.last_error = Some(e.to_string());
                Err(FeedError::Source(e))
            }
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, FeedState> {
        self.state.read().expect("feed state lock poisoned")
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, FeedState> {
        self.state.write().expect("feed state lock poisoned")
    }
}

/// A scroll listener bound to a controller for the lifetime of a mount.
///
/// Consumes `ScrollMetrics` events from a channel on a background task and
/// forwards them to the controller. Dropping the binding detaches the
/// listener, so teardown cannot leak the subscription.
pub struct ScrollBinding {
    handle: JoinHandle<()>,
}

impl ScrollBinding {
    pub fn attach<S>(
        controller: Arc<FeedController<S>>,
        mut events: mpsc::Receiver<ScrollMetrics>,
    ) -> Self
    where
        S: FeedSource + 'static,
    {
        let handle = tokio::spawn(async move {
            while let Some(metrics) = events.recv().await {
                if let Err(e) = controller.on_scroll(metrics).await {
                    tracing::warn!("scroll-triggered fetch failed: {}", e);
                }
            }
        });
        Self { handle }
    }
}

impl Drop for ScrollBinding {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
