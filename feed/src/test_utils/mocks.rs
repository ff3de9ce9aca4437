//! Mock implementations of port traits
//!
//! `ScriptedFeedSource` serves pre-scripted pages keyed by
//! (sort mode, offset, time range), records every call, and can inject
//! one-shot failures or hold a specific fetch in flight behind a gate.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::entities::{FeedQuery, SortMode, TimeRange, Ui};
use crate::domain::ports::FeedSource;
use crate::error::SourceError;

type PageKey = (SortMode, usize, TimeRange);

/// Handle for a gated fetch: `entered` fires when the call reaches the
/// source, the call then parks until `release` is notified. Both sides use
/// `Notify`, which stores a permit, so signal order cannot deadlock.
pub struct SourceGate {
    pub entered: Arc<Notify>,
    pub release: Arc<Notify>,
}

struct GatedCall {
    sort_mode: SortMode,
    offset: usize,
    entered: Arc<Notify>,
    release: Arc<Notify>,
}

/// In-memory feed source driven entirely by the test
#[derive(Default)]
pub struct ScriptedFeedSource {
    pages: RwLock<HashMap<PageKey, Vec<Ui>>>,
    home: RwLock<Vec<Ui>>,
    page_failures: Mutex<HashMap<(SortMode, usize), String>>,
    home_failure: Mutex<Option<String>>,
    calls: Mutex<Vec<FeedQuery>>,
    gate: Mutex<Option<GatedCall>>,
}

impl ScriptedFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the page returned for a (sort, offset, range) request.
    /// Unscripted requests return an empty page.
    pub fn with_page(
        self,
        sort_mode: SortMode,
        offset: usize,
        time_range: TimeRange,
        items: Vec<Ui>,
    ) -> Self {
        self.pages
            .write()
            .unwrap()
            .insert((sort_mode, offset, time_range), items);
        self
    }

    /// Script the home grid
    pub fn with_home(self, items: Vec<Ui>) -> Self {
        *self.home.write().unwrap() = items;
        self
    }

    /// Make the next fetch for (sort, offset) fail once with an API error
    pub fn fail_once(&self, sort_mode: SortMode, offset: usize, message: &str) {
        self.page_failures
            .lock()
            .unwrap()
            .insert((sort_mode, offset), message.to_string());
    }

    /// Make the next home fetch fail once
    pub fn fail_home_once(&self, message: &str) {
        *self.home_failure.lock().unwrap() = Some(message.to_string());
    }

    /// Hold the next fetch matching (sort, offset) until released
    pub fn gate(&self, sort_mode: SortMode, offset: usize) -> SourceGate {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(GatedCall {
            sort_mode,
            offset,
            entered: entered.clone(),
            release: release.clone(),
        });
        SourceGate { entered, release }
    }

    /// Every page request seen so far, in order
    pub fn calls(&self) -> Vec<FeedQuery> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl FeedSource for ScriptedFeedSource {
    async fn fetch_page(
        &self,
        sort_mode: SortMode,
        offset: usize,
        limit: usize,
        time_range: TimeRange,
    ) -> Result<Vec<Ui>, SourceError> {
        self.calls.lock().unwrap().push(FeedQuery {
            sort_mode,
            time_range,
            offset,
        });

        let gated = {
            let gate = self.gate.lock().unwrap();
            gate.as_ref()
                .filter(|g| g.sort_mode == sort_mode && g.offset == offset)
                .map(|g| (g.entered.clone(), g.release.clone()))
        };
        if let Some((entered, release)) = gated {
            entered.notify_one();
            release.notified().await;
        }

        if let Some(message) = self.page_failures.lock().unwrap().remove(&(sort_mode, offset)) {
            return Err(SourceError::Api {
                status: 500,
                message,
            });
        }

        let mut page = self
            .pages
            .read()
            .unwrap()
            .get(&(sort_mode, offset, time_range))
            .cloned()
            .unwrap_or_default();
        page.truncate(limit);
        Ok(page)
    }

    async fn fetch_home(&self) -> Result<Vec<Ui>, SourceError> {
        if let Some(message) = self.home_failure.lock().unwrap().take() {
            return Err(SourceError::Api {
                status: 500,
                message,
            });
        }
        Ok(self.home.read().unwrap().clone())
    }
}
