//! Settings loader for `config.toml`
//!
//! Resolution order for the endpoint, highest first:
//! 1. `--endpoint` on the command line
//! 2. `JOKES_ENDPOINT` environment variable
//! 3. `[endpoint] url` in the config file
//! 4. the built-in default

use std::path::{Path, PathBuf};

use super::types::Settings;
use jokes_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "joke-dispenser";

/// Environment variable overriding the configured endpoint
pub const ENDPOINT_ENV_VAR: &str = "JOKES_ENDPOINT";

const DEFAULT_CONFIG: &str = r#"# Joke Dispenser Configuration

[endpoint]
# Absolute URL answering GET with {"joke": "..."}
url = "http://localhost:4000/api/joke"
# Per-request timeout in milliseconds (0 = wait forever)
request_timeout_ms = 0

[ui]
title = "DevOps Joke Dispenser"
# Click the "Get New Joke" button with the mouse
mouse = true
"#;

/// Default config file location: `<config_dir>/joke-dispenser/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from a config file, falling back to defaults.
///
/// A missing file is normal; an unreadable or unparseable one is logged.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Apply `JOKES_ENDPOINT` if set and non-empty
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(endpoint) = std::env::var(ENDPOINT_ENV_VAR) {
        let endpoint = endpoint.trim();
        if !endpoint.is_empty() {
            debug!("Endpoint overridden by {}: {}", ENDPOINT_ENV_VAR, endpoint);
            settings.endpoint.url = endpoint.to_string();
        }
    }
}

/// Resolve the effective settings for this run.
///
/// An explicitly given config path must exist. The resulting endpoint is
/// validated so a bad URL fails at startup rather than on the first fetch.
pub fn resolve_settings(
    config_path: Option<&Path>,
    endpoint_override: Option<&str>,
) -> Result<Settings> {
    let mut settings = match config_path {
        Some(path) if !path.exists() => {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        Some(path) => load_settings(path),
        None => default_config_path()
            .map(|path| load_settings(&path))
            .unwrap_or_default(),
    };

    apply_env_overrides(&mut settings);

    if let Some(endpoint) = endpoint_override {
        settings.endpoint.url = endpoint.to_string();
    }

    settings.endpoint_url()?;
    info!("Using endpoint {}", settings.endpoint.url);

    Ok(settings)
}

/// Write a commented default config file if none exists.
///
/// Returns `true` when a file was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;
    info!("Created default config at {:?}", config_path);

    Ok(true)
}
