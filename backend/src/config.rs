//! Relay configuration, read from the environment (and a `.env` file when
//! present) at startup.
//!
//! | Variable | Default |
//! |---|---|
//! | `RELAY_HOST` | `127.0.0.1` |
//! | `RELAY_PORT` | `8080` |
//! | `NOTIFY_API_URL` | required |
//! | `NOTIFY_ACCESS_TOKEN` | required |
//! | `NOTIFY_TEMPLATE_NAME` | `reminder_tempate_lic` |
//! | `NOTIFY_TEMPLATE_LANGUAGE` | `en` |

use lead_common::submission::{DEFAULT_LANGUAGE_CODE, DEFAULT_TEMPLATE_NAME};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("RELAY_PORT is not a valid port: {0}")]
    InvalidPort(String),
}

#[derive(Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    /// Messaging API endpoint that accepts template messages.
    pub notify_api_url: String,
    /// Bearer credential for `notify_api_url`. Never logged.
    pub access_token: String,
    pub template_name: String,
    pub template_language: String,
}

impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("notify_api_url", &self.notify_api_url)
            .field("access_token", &"<redacted>")
            .field("template_name", &self.template_name)
            .field("template_language", &self.template_language)
            .finish()
    }
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source. Blank values
    /// count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let port = match get("RELAY_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8080,
        };

        Ok(Self {
            host: get("RELAY_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            notify_api_url: require("NOTIFY_API_URL")?,
            access_token: require("NOTIFY_ACCESS_TOKEN")?,
            template_name: get("NOTIFY_TEMPLATE_NAME")
                .unwrap_or_else(|| DEFAULT_TEMPLATE_NAME.to_string()),
            template_language: get("NOTIFY_TEMPLATE_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_LANGUAGE_CODE.to_string()),
        })
    }
}
