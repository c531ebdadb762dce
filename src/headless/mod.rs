//! Headless mode - JSON event output for scripting and E2E testing
//!
//! Runs the same engine as the TUI but prints structured JSON events to
//! stdout instead of drawing, so scripts can drive the viewer without
//! parsing ANSI escape codes.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"fetch_started","token":1,"timestamp":1704700001000}
//! {"event":"joke_loaded","token":1,"joke":"It works on my machine.","timestamp":1704700001042}
//! {"event":"shutdown","token":1,"timestamp":1704700001043}
//! ```

pub mod runner;

use std::io::Write;

use chrono::Utc;
use jokes_app::EngineEvent;
use jokes_core::{Joke, RequestToken};
use serde::Serialize;
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A fetch was issued
    FetchStarted { token: RequestToken, timestamp: i64 },

    /// The latest fetch succeeded
    JokeLoaded {
        token: RequestToken,
        joke: Joke,
        timestamp: i64,
    },

    /// The latest fetch failed
    FetchFailed {
        token: RequestToken,
        message: String,
        timestamp: i64,
    },

    /// A superseded response was dropped
    StaleResponseDiscarded { token: RequestToken, timestamp: i64 },

    /// The runner is exiting; `token` is the last one issued
    Shutdown { token: RequestToken, timestamp: i64 },
}

impl HeadlessEvent {
    /// Translate an engine event. `latest` fills in the token for shutdown.
    pub fn from_engine_event(event: EngineEvent, latest: RequestToken) -> Self {
        let timestamp = Self::now();
        match event {
            EngineEvent::FetchStarted { token } => Self::FetchStarted { token, timestamp },
            EngineEvent::JokeLoaded { token, joke } => Self::JokeLoaded {
                token,
                joke,
                timestamp,
            },
            EngineEvent::FetchFailed { token, message } => Self::FetchFailed {
                token,
                message,
                timestamp,
            },
            EngineEvent::StaleResponseDiscarded { token } => {
                Self::StaleResponseDiscarded { token, timestamp }
            }
            EngineEvent::Shutdown => Self::Shutdown {
                token: latest,
                timestamp,
            },
        }
    }

    /// Write this event as one NDJSON line and flush
    pub fn emit<W: Write>(&self, out: &mut W) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", json) {
            error!("Failed to write headless event: {}", e);
            return;
        }

        // Flush to ensure immediate output
        if let Err(e) = out.flush() {
            error!("Failed to flush headless output: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }
}
