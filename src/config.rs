// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client configuration loaded from environment variables.

use crate::models::{EventScope, RsvpFilter};
use std::env;
use std::path::PathBuf;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the event API (no trailing slash)
    pub api_url: String,
    /// Directory the session token is persisted in; in-memory when unset
    pub storage_dir: Option<PathBuf>,

    // --- Binary defaults ---
    /// Email used to sign in when no token is stored
    pub email: Option<String>,
    /// Password used to sign in when no token is stored
    pub password: Option<String>,
    /// Which event collection to load
    pub scope: EventScope,
    /// Free-text search applied to the loaded list
    pub query: String,
    /// RSVP category applied to the loaded list
    pub rsvp_filter: RsvpFilter,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000/api".to_string(),
            storage_dir: None,
            email: None,
            password: None,
            scope: EventScope::All,
            query: String::new(),
            rsvp_filter: RsvpFilter::All,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_url = env::var("EVENTDESK_API_URL")
            .map_err(|_| ConfigError::Missing("EVENTDESK_API_URL"))?
            .trim()
            .trim_end_matches('/')
            .to_string();
        if api_url.is_empty() {
            return Err(ConfigError::Missing("EVENTDESK_API_URL"));
        }

        let scope = match env::var("EVENTDESK_SCOPE") {
            Ok(v) => v
                .parse()
                .map_err(|_| ConfigError::Invalid("EVENTDESK_SCOPE", v))?,
            Err(_) => EventScope::All,
        };

        let rsvp_filter = match env::var("EVENTDESK_RSVP") {
            Ok(v) => v
                .parse()
                .map_err(|_| ConfigError::Invalid("EVENTDESK_RSVP", v))?,
            Err(_) => RsvpFilter::All,
        };

        Ok(Self {
            api_url,
            storage_dir: env::var("EVENTDESK_STORAGE_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            email: env::var("EVENTDESK_EMAIL").ok(),
            password: env::var("EVENTDESK_PASSWORD").ok(),
            scope,
            query: env::var("EVENTDESK_QUERY").unwrap_or_default(),
            rsvp_filter,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations don't race other tests in this module.
    #[test]
    fn test_config_from_env() {
        env::set_var("EVENTDESK_API_URL", "https://events.example.com/api/");
        env::set_var("EVENTDESK_SCOPE", "organized");
        env::set_var("EVENTDESK_RSVP", "notgoing");
        env::remove_var("EVENTDESK_STORAGE_DIR");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.api_url, "https://events.example.com/api");
        assert_eq!(config.scope, EventScope::Organized);
        assert_eq!(config.rsvp_filter, RsvpFilter::NotGoing);
        assert!(config.storage_dir.is_none());

        env::set_var("EVENTDESK_RSVP", "sometimes");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("EVENTDESK_RSVP", _)));

        env::remove_var("EVENTDESK_RSVP");
        env::remove_var("EVENTDESK_SCOPE");
    }
}
