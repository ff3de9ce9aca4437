//! Test fixtures
//!
//! Factory functions for creating test cards with sensible defaults.

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::{Ui, UiId, UserId, UserSummary};

/// Create a test card with a deterministic id (`ui-<n>`)
pub fn test_ui(n: usize) -> Ui {
    Ui {
        id: UiId(format!("ui-{}", n)),
        user_id: UserId(format!("usr-{}", n % 3)),
        prompt: format!("generated ui #{}", n),
        img: format!("https://cdn.test/ui-{}.png", n),
        created_at: Utc::now() - Duration::minutes(n as i64),
        likes_count: (n % 7) as u32,
        view_count: (n * 3) as u32,
        forked_from: None,
        user: UserSummary {
            username: format!("user{}", n % 3),
            avatar_url: None,
        },
    }
}

/// Create a test card with a random unique id
pub fn test_ui_unique() -> Ui {
    Ui {
        id: UiId(format!("ui-{}", Uuid::new_v4())),
        ..test_ui(0)
    }
}

/// Create a page of `len` consecutive test cards starting at `offset`
pub fn test_page(offset: usize, len: usize) -> Vec<Ui> {
    (offset..offset + len).map(test_ui).collect()
}
