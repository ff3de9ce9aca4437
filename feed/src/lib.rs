//! uigen feed library
//!
//! Client-side state for the uigen explore/home galleries: the paginated
//! feed controller, the domain model for generated UI cards, and the HTTP
//! adapter that talks to the backend feed endpoints.
//! Uses a ports & adapters split so the controller is testable without a
//! network or a rendering environment.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod time;

#[cfg(test)]
pub mod test_utils;

pub use app::{
    FeedController, FeedSnapshot, HomeFeed, ScrollBinding, ScrollMetrics, PAGE_SIZE,
    SCROLL_THRESHOLD_PX,
};
pub use config::Config;
pub use domain::entities::{
    FeedQuery, Session, SessionUser, SortMode, TimeRange, Ui, UiId, UserId, UserSummary,
};
pub use domain::ports::{FeedSource, Navigator};
pub use error::{FeedError, SourceError};
