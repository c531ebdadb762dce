//! Configuration file parsing for the joke dispenser
//!
//! Supports `<config_dir>/joke-dispenser/config.toml` (or an explicit path),
//! overridden by the `JOKES_ENDPOINT` environment variable and `--endpoint`.

pub mod settings;
pub mod types;

pub use settings::{
    apply_env_overrides, default_config_path, init_config_file, load_settings, resolve_settings,
    ENDPOINT_ENV_VAR,
};
pub use types::*;
