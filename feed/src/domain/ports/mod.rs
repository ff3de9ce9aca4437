//! Domain ports (traits)
//!
//! Port traits define the interfaces the feed layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod feed_source;
pub mod navigator;

pub use feed_source::FeedSource;
pub use navigator::Navigator;
