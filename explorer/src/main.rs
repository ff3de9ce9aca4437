//! uigen explorer
//!
//! Terminal client for the uigen galleries: renders the explore feed as a
//! text grid, pages it with `more`, switches sort tabs and time windows,
//! and opens cards in the web app. A maintenance gate and the ambient
//! session context mirror the web shell.

mod command;
mod render;

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use command::{help_text, parse_command, Command};
use uigen_feed::adapters::HttpFeedSource;
use uigen_feed::{Config, FeedController, HomeFeed, Navigator, SortMode};

/// Navigator that hands navigation off to the user's browser context by
/// printing the target URL. Fire-and-forget, like the web router.
struct ShellNavigator {
    base_url: String,
}

impl Navigator for ShellNavigator {
    fn navigate_to(&self, path: &str) {
        println!("Opening {}{}", self.base_url, path);
    }
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr; stdout is the gallery.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();

    if config.maintenance_enabled() {
        println!("uigen is down for maintenance. Check back soon.");
        return Ok(());
    }

    let session = config.session();
    let source = Arc::new(HttpFeedSource::new(&config.api_base_url)?);
    let controller = Arc::new(FeedController::new(source.clone()));
    let home = HomeFeed::new(source);
    let navigator = ShellNavigator {
        base_url: config.api_base_url.clone(),
    };

    tracing::info!(api = %config.api_base_url, "starting explorer");

    if let Err(e) = controller.load().await {
        tracing::warn!("initial feed load failed: {}", e);
    }
    println!("{}", render::render_feed(&controller.snapshot(), &session, Utc::now()));
    println!("{}", help_text());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(Command::Mode(mode)) => {
                if let Err(e) = controller.set_sort_mode(mode).await {
                    tracing::warn!("sort switch fetch failed: {}", e);
                }
                println!("{}", render::render_feed(&controller.snapshot(), &session, Utc::now()));
            }
            Ok(Command::Range(range)) => {
                if controller.query().sort_mode == SortMode::Latest {
                    println!("Time ranges apply to the ranked tabs; switch to most-viewed or most-liked first.");
                } else {
                    if let Err(e) = controller.set_time_range(range).await {
                        tracing::warn!("time range fetch failed: {}", e);
                    }
                    println!("{}", render::render_feed(&controller.snapshot(), &session, Utc::now()));
                }
            }
            Ok(Command::More) => {
                match controller.request_more().await {
                    Ok(false) if controller.is_exhausted() => {
                        println!("-- end of feed --");
                    }
                    Ok(_) => {}
                    Err(e) => tracing::warn!("page fetch failed: {}", e),
                }
                println!("{}", render::render_feed(&controller.snapshot(), &session, Utc::now()));
            }
            Ok(Command::Refresh) => {
                if let Err(e) = controller.retry().await {
                    tracing::warn!("refresh failed: {}", e);
                }
                println!("{}", render::render_feed(&controller.snapshot(), &session, Utc::now()));
            }
            Ok(Command::Open { index }) => {
                let snapshot = controller.snapshot();
                match snapshot.items.get(index) {
                    Some(ui) => navigator.navigate_to(&ui.detail_path()),
                    None => println!("No card at {}", index + 1),
                }
            }
            Ok(Command::Home) => match home.load().await {
                Ok(items) => println!("{}", render::render_home(&items, Utc::now())),
                Err(e) => println!("[ERROR] {}", e),
            },
            Ok(Command::Help) => println!("{}", help_text()),
            Ok(Command::Quit) => break,
            Err(e) => println!("{}", e),
        }
        prompt();
    }

    Ok(())
}
