//! Error types for the feed library
//!
//! Two layers, mirroring where failures originate:
//! - `SourceError`: failures from the backend feed endpoints
//! - `FeedError`: what the controller surfaces to its callers

use thiserror::Error;

/// Errors from the backend feed source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Errors surfaced by the feed controller
///
/// Every variant is recoverable: the view layer keeps the accumulated items
/// and offers a retry, it never tears down the feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Feed source error: {0}")]
    Source(#[from] SourceError),
}
