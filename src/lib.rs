//! Joke Dispenser Library
//!
//! A terminal joke viewer that fetches jokes from an HTTP endpoint. The
//! engine lives in `jokes-app`; this crate wires it to the two frontends.

pub mod headless;

use jokes_app::config::Settings;
use jokes_app::{Engine, HttpJokeSource};
use jokes_core::prelude::*;

// Re-export main entry points
pub use headless::runner::run_headless;
pub use jokes_tui::run as run_tui;

/// Build an engine that fetches from the configured HTTP endpoint
pub fn http_engine(settings: Settings) -> Result<Engine<HttpJokeSource>> {
    let source = HttpJokeSource::new(settings.endpoint_url()?, settings.request_timeout())?;
    Ok(Engine::new(settings, source))
}
