//! Generated UI card entity
//!
//! A single generated-UI artifact as shown in the galleries. The wire
//! format is the backend's camelCase JSON; serde renames keep the Rust
//! fields idiomatic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a generated UI (opaque backend id)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UiId(pub String);

impl From<&str> for UiId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UiId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UiId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a user (opaque backend id)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Author summary embedded in every card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
    #[serde(rename = "imageUrl")]
    pub avatar_url: Option<String>,
}

/// A generated UI artifact in the feed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ui {
    pub id: UiId,
    pub user_id: UserId,
    /// The generation prompt the user typed
    pub prompt: String,
    /// Rendered preview image URI
    pub img: String,
    pub created_at: DateTime<Utc>,
    pub likes_count: u32,
    pub view_count: u32,
    /// Lineage link to the card this one was forked from, if any
    #[serde(default)]
    pub forked_from: Option<UiId>,
    pub user: UserSummary,
}

impl Ui {
    /// Route of the card's detail page
    pub fn detail_path(&self) -> String {
        format!("/ui/{}", self.id)
    }

    pub fn is_fork(&self) -> bool {
        self.forked_from.is_some()
    }
}
