use std::env;

use crate::domain::entities::{Session, SessionUser, UserId};

/// Sentinel value the deployment sets to put the whole app behind the
/// maintenance page.
const MAINTENANCE_SENTINEL: &str = "MAINTENANCE";

#[derive(Clone)]
pub struct Config {
    /// Base URL of the uigen backend (feed endpoints live under /api/ui)
    pub api_base_url: String,
    /// Raw MAINTENANCE env value, compared against the sentinel
    maintenance: Option<String>,
    /// Username of the signed-in user, if any (ambient session context)
    pub username: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_base_url: env::var("UIGEN_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            maintenance: env::var("MAINTENANCE").ok(),
            username: env::var("UIGEN_USERNAME").ok(),
        }
    }

    /// Whether the deployment is gated behind the maintenance page
    pub fn maintenance_enabled(&self) -> bool {
        self.maintenance.as_deref() == Some(MAINTENANCE_SENTINEL)
    }

    /// Build the ambient session context from the configured identity
    pub fn session(&self) -> Session {
        match &self.username {
            Some(name) => Session::signed_in(SessionUser {
                id: UserId::from(name.as_str()),
                username: name.clone(),
                avatar_url: None,
            }),
            None => Session::anonymous(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(maintenance: Option<&str>, username: Option<&str>) -> Config {
        Config {
            api_base_url: "http://localhost:3000".to_string(),
            maintenance: maintenance.map(|s| s.to_string()),
            username: username.map(|s| s.to_string()),
        }
    }

    #[test]
    fn maintenance_requires_sentinel_value() {
        assert!(config(Some("MAINTENANCE"), None).maintenance_enabled());
        assert!(!config(Some("on"), None).maintenance_enabled());
        assert!(!config(None, None).maintenance_enabled());
    }

    #[test]
    fn session_from_username() {
        let session = config(None, Some("ada")).session();
        assert!(session.is_authenticated());
        assert_eq!(session.user.unwrap().username, "ada");
    }

    #[test]
    fn session_anonymous_without_username() {
        assert!(!config(None, None).session().is_authenticated());
    }
}
