//! Configuration types for the joke dispenser
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `EndpointSettings` - Where and how jokes are fetched
//! - `UiSettings` - Terminal UI preferences

use std::time::Duration;

use jokes_core::prelude::*;
use jokes_core::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use url::Url;

/// Application settings, loaded from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub endpoint: EndpointSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EndpointSettings {
    /// Absolute http(s) URL answering `GET` with `{ "joke": "..." }`
    #[serde(default = "default_url")]
    pub url: String,

    /// Per-request timeout in milliseconds; 0 disables the timeout
    #[serde(default)]
    pub request_timeout_ms: u64,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            url: default_url(),
            request_timeout_ms: 0,
        }
    }
}

/// Terminal UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Heading shown at the top of the screen
    #[serde(default = "default_title")]
    pub title: String,

    /// Capture the mouse so the button can be clicked
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            mouse: true,
        }
    }
}

fn default_url() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_title() -> String {
    "DevOps Joke Dispenser".to_string()
}

fn default_true() -> bool {
    true
}

impl Settings {
    /// Parse and validate the configured endpoint
    pub fn endpoint_url(&self) -> Result<Url> {
        let url = Url::parse(&self.endpoint.url).map_err(|e| {
            Error::config_invalid(format!("endpoint '{}': {}", self.endpoint.url, e))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::config_invalid(format!(
                "endpoint '{}' must use http or https, not '{}'",
                self.endpoint.url, other
            ))),
        }
    }

    /// Request timeout, if one is configured
    pub fn request_timeout(&self) -> Option<Duration> {
        match self.endpoint.request_timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}
