//! Domain entities
//!
//! Models for the explore/home galleries. `Ui` is read-only from the
//! client's point of view; updates only arrive through a full re-fetch.

pub mod feed;
pub mod session;
pub mod ui;

pub use feed::{FeedQuery, SortMode, TimeRange};
pub use session::{Session, SessionUser};
pub use ui::{Ui, UiId, UserId, UserSummary};
