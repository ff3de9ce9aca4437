//! Application layer
//!
//! The feed controller and its simpler home-grid sibling. Controllers are
//! generic over the `FeedSource` port so tests run against scripted
//! in-memory sources.

pub mod feed_controller;
pub mod home_feed;

pub use feed_controller::{
    FeedController, FeedSnapshot, ScrollBinding, ScrollMetrics, PAGE_SIZE, SCROLL_THRESHOLD_PX,
};
pub use home_feed::HomeFeed;
