//! Ambient session context
//!
//! Read-only identity the app shell provides. The feed controller never
//! mutates it; the view layer uses it for the header and auth-gated
//! affordances.

use serde::{Deserialize, Serialize};

use super::ui::UserId;

/// The signed-in user, as the shell sees them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    pub username: String,
    pub avatar_url: Option<String>,
}

/// Session context for the current visit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<SessionUser>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn signed_in(user: SessionUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
