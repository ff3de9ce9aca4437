//! Command parser for the explore prompt
//!
//! Parses text commands like "more", "most-liked", "range 24h", "open 3".

use thiserror::Error;
use uigen_feed::{SortMode, TimeRange};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing argument for: {0}")]
    MissingArgument(String),
}

/// Actions a user can take at the explore prompt
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Switch the sort tab
    Mode(SortMode),
    /// Change the ranking time window
    Range(TimeRange),
    /// Load the next page
    More,
    /// Re-fetch the current query (also retries after an error)
    Refresh,
    /// Open card N (1-based, as rendered)
    Open { index: usize },
    /// Show the home preview grid
    Home,
    Help,
    Quit,
}

/// Parse a command from a prompt line
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ParseError::UnknownCommand("empty input".to_string()));
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    let command = parts[0].to_lowercase();

    match command.as_str() {
        "latest" => Ok(Command::Mode(SortMode::Latest)),
        "most-viewed" | "most_viewed" | "viewed" => Ok(Command::Mode(SortMode::MostViewed)),
        "most-liked" | "most_liked" | "liked" => Ok(Command::Mode(SortMode::MostLiked)),

        "range" | "time" => {
            if parts.len() < 2 {
                return Err(ParseError::MissingArgument("range".to_string()));
            }
            let range: TimeRange = parts[1]
                .parse()
                .map_err(|_| ParseError::InvalidArgument(format!("'{}' is not a time range (1h, 24h, 7d, 30d, all)", parts[1])))?;
            Ok(Command::Range(range))
        }

        "more" | "next" => Ok(Command::More),
        "refresh" | "retry" | "r" => Ok(Command::Refresh),

        "open" | "view" => {
            if parts.len() < 2 {
                return Err(ParseError::MissingArgument("open".to_string()));
            }
            let index: usize = parts[1].parse().map_err(|_| {
                ParseError::InvalidArgument(format!("'{}' is not a valid number", parts[1]))
            })?;
            if index == 0 {
                return Err(ParseError::InvalidArgument(
                    "index must be 1 or greater".to_string(),
                ));
            }
            Ok(Command::Open { index: index - 1 })
        }

        "home" => Ok(Command::Home),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),

        _ => Err(ParseError::UnknownCommand(command)),
    }
}

/// Help text listing the prompt commands
pub fn help_text() -> String {
    let mut buf = String::new();
    buf.push_str("Commands:\n");
    buf.push_str("  latest | most-viewed | most-liked  - switch sort tab\n");
    buf.push_str("  range <1h|24h|7d|30d|all>          - time window (ranked tabs)\n");
    buf.push_str("  more                               - load the next page\n");
    buf.push_str("  refresh                            - re-fetch (retries after errors)\n");
    buf.push_str("  open N                             - open card N\n");
    buf.push_str("  home                               - show the home preview grid\n");
    buf.push_str("  help                               - this text\n");
    buf.push_str("  quit                               - exit\n");
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sort_tabs() {
        assert_eq!(
            parse_command("latest").unwrap(),
            Command::Mode(SortMode::Latest)
        );
        assert_eq!(
            parse_command("most-viewed").unwrap(),
            Command::Mode(SortMode::MostViewed)
        );
        assert_eq!(
            parse_command("LIKED").unwrap(),
            Command::Mode(SortMode::MostLiked)
        );
    }

    #[test]
    fn parses_range() {
        assert_eq!(
            parse_command("range 24h").unwrap(),
            Command::Range(TimeRange::LastDay)
        );
        assert_eq!(
            parse_command("time all").unwrap(),
            Command::Range(TimeRange::AllTime)
        );
    }

    #[test]
    fn range_requires_a_valid_window() {
        assert!(matches!(
            parse_command("range"),
            Err(ParseError::MissingArgument(_))
        ));
        assert!(matches!(
            parse_command("range fortnight"),
            Err(ParseError::InvalidArgument(_))
        ));
    }

    #[test]
    fn parses_open_as_zero_based() {
        assert_eq!(parse_command("open 3").unwrap(), Command::Open { index: 2 });
    }

    #[test]
    fn open_rejects_zero_and_non_numbers() {
        assert!(matches!(
            parse_command("open 0"),
            Err(ParseError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_command("open first"),
            Err(ParseError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_command("open"),
            Err(ParseError::MissingArgument(_))
        ));
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse_command("more").unwrap(), Command::More);
        assert_eq!(parse_command("refresh").unwrap(), Command::Refresh);
        assert_eq!(parse_command("home").unwrap(), Command::Home);
        assert_eq!(parse_command("?").unwrap(), Command::Help);
        assert_eq!(parse_command("q").unwrap(), Command::Quit);
    }

    #[test]
    fn rejects_unknown_and_empty_input() {
        assert!(matches!(
            parse_command("dance"),
            Err(ParseError::UnknownCommand(_))
        ));
        assert!(matches!(
            parse_command("   "),
            Err(ParseError::UnknownCommand(_))
        ));
    }
}
