//! Relative time labels
//!
//! Pure formatting for card timestamps ("5m ago", "2d ago"). No side
//! effects; callers pass `now` so rendering stays deterministic in tests.

use chrono::{DateTime, Utc};

/// Format a timestamp relative to `now`
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let seconds = elapsed.num_seconds();

    // Negative means clock skew between client and backend; treat as fresh.
    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{}h ago", hours);
    }

    let days = elapsed.num_days();
    if days < 30 {
        return format!("{}d ago", days);
    }

    let months = days / 30;
    if months < 12 {
        return format!("{}mo ago", months);
    }

    format!("{}y ago", days / 365)
}
