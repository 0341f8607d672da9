// src/config.rs
// =============================================================================
// Process-wide configuration for the explorer.
//
// Everything the API client needs (which account, which token, which API
// host) is gathered here exactly once at startup and then handed to the
// client by value. Nothing mutates it afterwards.
//
// Sources, in order of precedence:
// 1. Command-line overrides (e.g. --user)
// 2. Environment variables
// 3. A .env file in the working directory (loaded with dotenvy)
// 4. Built-in defaults
// =============================================================================

use std::env;

use anyhow::{Context, Result};
use url::Url;

/// Account explored when GH_EXPLORER_USERNAME is not set.
pub const DEFAULT_USERNAME: &str = "JuniorArias02";

/// Public GitHub REST API.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Page whose query string mirrors the browser state.
pub const DEFAULT_SITE_BASE: &str = "http://localhost:5173/";

// Immutable settings shared (read-only) by every API call
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub login whose profile and repositories are explored
    pub username: String,
    /// Access token attached to every request; None means anonymous
    pub token: Option<String>,
    /// Base URL of the REST API
    pub api_base: Url,
    /// Base URL used to build shareable browser/viewer links
    pub site_base: Url,
}

impl Config {
    /// Load configuration from the environment (and .env, if present).
    pub fn from_env() -> Result<Self> {
        // A missing .env file is normal, so the error is ignored
        dotenvy::dotenv().ok();

        let username =
            env::var("GH_EXPLORER_USERNAME").unwrap_or_else(|_| DEFAULT_USERNAME.to_string());

        // Treat an empty token the same as an absent one
        let token = env::var("GITHUB_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        let api_base = env::var("GH_EXPLORER_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let api_base = Url::parse(&api_base)
            .with_context(|| format!("Invalid GH_EXPLORER_API_BASE: {}", api_base))?;

        let site_base = env::var("GH_EXPLORER_SITE_BASE")
            .unwrap_or_else(|_| DEFAULT_SITE_BASE.to_string());
        let site_base = Url::parse(&site_base)
            .with_context(|| format!("Invalid GH_EXPLORER_SITE_BASE: {}", site_base))?;

        Ok(Self {
            username,
            token,
            api_base,
            site_base,
        })
    }

    /// Returns a copy of this config exploring a different account.
    pub fn with_username(mut self, username: Option<String>) -> Self {
        if let Some(username) = username {
            self.username = username;
        }
        self
    }

    /// Value of the Authorization header, if a token is configured.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {}", token))
    }
}

#[cfg(test)]
impl Config {
    /// Fixed configuration for unit tests, never reads the environment.
    pub fn for_tests() -> Self {
        Self {
            username: "octo".to_string(),
            token: Some("secret".to_string()),
            api_base: Url::parse(DEFAULT_API_BASE).unwrap(),
            site_base: Url::parse("https://portfolio.example/").unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_header_uses_bearer() {
        let config = Config::for_tests();
        assert_eq!(config.authorization().as_deref(), Some("Bearer secret"));
    }

    #[test]
    fn test_no_token_means_no_header() {
        let config = Config {
            token: None,
            ..Config::for_tests()
        };
        assert!(config.authorization().is_none());
    }

    #[test]
    fn test_username_override() {
        let config = Config::for_tests().with_username(Some("someone".to_string()));
        assert_eq!(config.username, "someone");

        let config = Config::for_tests().with_username(None);
        assert_eq!(config.username, "octo");
    }
}
