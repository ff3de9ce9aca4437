//! Text rendering for the explore and home galleries
//!
//! The terminal stand-in for the card grid: one line per card with the
//! prompt, author, view/like counts and a relative timestamp, plus the
//! loading / end-of-feed / error footers the web UI shows as skeletons
//! and toasts.

use chrono::{DateTime, Utc};
use uigen_feed::time::time_ago;
use uigen_feed::{FeedSnapshot, Session, SortMode, Ui};

/// Render the explore feed
pub fn render_feed(snapshot: &FeedSnapshot, session: &Session, now: DateTime<Utc>) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("# Explore — {}", tab_label(snapshot.sort_mode)));
    if snapshot.sort_mode != SortMode::Latest {
        buf.push_str(&format!(" ({})", snapshot.time_range.label()));
    }
    buf.push('\n');

    match &session.user {
        Some(user) => buf.push_str(&format!("Signed in as {}\n", user.username)),
        None => buf.push_str("Browsing anonymously\n"),
    }
    buf.push('\n');

    if snapshot.items.is_empty() && !snapshot.loading && snapshot.error.is_none() {
        buf.push_str("_No generations to show._\n");
    }

    for (i, ui) in snapshot.items.iter().enumerate() {
        buf.push_str(&render_card(i + 1, ui, now));
        buf.push('\n');
    }

    if snapshot.loading {
        buf.push_str("\n... loading ...\n");
    }
    if snapshot.exhausted {
        buf.push_str("\n-- end of feed --\n");
    }
    if let Some(message) = &snapshot.error {
        buf.push_str(&format!("\n[ERROR] {} (type `refresh` to retry)\n", message));
    }

    buf
}

/// Render the home preview grid
pub fn render_home(items: &[Ui], now: DateTime<Utc>) -> String {
    let mut buf = String::new();
    buf.push_str("# Home\n\n");

    if items.is_empty() {
        buf.push_str("_No generations yet._\n");
        return buf;
    }

    for (i, ui) in items.iter().enumerate() {
        buf.push_str(&render_card(i + 1, ui, now));
        buf.push('\n');
    }

    buf
}

fn render_card(index: usize, ui: &Ui, now: DateTime<Utc>) -> String {
    let fork_marker = if ui.is_fork() { " (fork)" } else { "" };
    format!(
        "[{}] {}{} | by {} | {} views | {} likes | {}",
        index,
        truncate(&ui.prompt, 48),
        fork_marker,
        ui.user.username,
        ui.view_count,
        ui.likes_count,
        time_ago(ui.created_at, now),
    )
}

fn tab_label(mode: SortMode) -> &'static str {
    match mode {
        SortMode::Latest => "Latest",
        SortMode::MostViewed => "Most Viewed",
        SortMode::MostLiked => "Most Liked",
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
