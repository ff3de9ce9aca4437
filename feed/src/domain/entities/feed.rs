//! Feed query model
//!
//! The client-owned, mutable side of the explore feed: which ordering the
//! user picked, which time window applies, and how far pagination has
//! advanced.

use serde::{Deserialize, Serialize};

/// Server-side ordering of the explore feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Newest first
    Latest,
    /// Ranked by view count within the time range
    MostViewed,
    /// Ranked by like count within the time range
    MostLiked,
}

impl Default for SortMode {
    fn default() -> Self {
        SortMode::Latest
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortMode::Latest => write!(f, "latest"),
            SortMode::MostViewed => write!(f, "most_viewed"),
            SortMode::MostLiked => write!(f, "most_liked"),
        }
    }
}

impl std::str::FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "latest" => Ok(SortMode::Latest),
            "most_viewed" | "most-viewed" => Ok(SortMode::MostViewed),
            "most_liked" | "most-liked" => Ok(SortMode::MostLiked),
            _ => Err(format!("Unknown sort mode: {}", s)),
        }
    }
}

/// Filter window applied to the ranked (non-latest) sort modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1h")]
    LastHour,
    #[serde(rename = "24h")]
    LastDay,
    #[serde(rename = "7d")]
    LastWeek,
    #[serde(rename = "30d")]
    LastMonth,
    #[serde(rename = "all")]
    AllTime,
}

impl Default for TimeRange {
    fn default() -> Self {
        TimeRange::AllTime
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeRange::LastHour => write!(f, "1h"),
            TimeRange::LastDay => write!(f, "24h"),
            TimeRange::LastWeek => write!(f, "7d"),
            TimeRange::LastMonth => write!(f, "30d"),
            TimeRange::AllTime => write!(f, "all"),
        }
    }
}

impl std::str::FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1h" => Ok(TimeRange::LastHour),
            "24h" => Ok(TimeRange::LastDay),
            "7d" => Ok(TimeRange::LastWeek),
            "30d" => Ok(TimeRange::LastMonth),
            "all" => Ok(TimeRange::AllTime),
            _ => Err(format!("Unknown time range: {}", s)),
        }
    }
}

impl TimeRange {
    /// Human label, matching the explore page's select options
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::LastHour => "Last 1 Hour",
            TimeRange::LastDay => "Last 24 Hours",
            TimeRange::LastWeek => "This Week",
            TimeRange::LastMonth => "This Month",
            TimeRange::AllTime => "All Time",
        }
    }
}

/// The fetch parameters a single page request is issued with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedQuery {
    pub sort_mode: SortMode,
    pub time_range: TimeRange,
    /// Offset into the feed's total ordering, advanced one page at a time
    pub offset: usize,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            sort_mode: SortMode::Latest,
            time_range: TimeRange::AllTime,
            offset: 0,
        }
    }
}
