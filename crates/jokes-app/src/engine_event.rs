//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use jokes_core::{Joke, RequestToken};

/// Domain events emitted by the Engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// A fetch was issued and the view entered Loading
    FetchStarted { token: RequestToken },

    /// The latest fetch succeeded and its joke is displayed
    JokeLoaded { token: RequestToken, joke: Joke },

    /// The latest fetch failed; `message` is the user-visible text
    FetchFailed {
        token: RequestToken,
        message: String,
    },

    /// A superseded response arrived and was dropped
    StaleResponseDiscarded { token: RequestToken },

    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Event type name for logging and serialization
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::FetchStarted { .. } => "fetch_started",
            EngineEvent::JokeLoaded { .. } => "joke_loaded",
            EngineEvent::FetchFailed { .. } => "fetch_failed",
            EngineEvent::StaleResponseDiscarded { .. } => "stale_response_discarded",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_names() {
        let token = RequestToken::NONE.next();
        assert_eq!(
            EngineEvent::FetchStarted { token }.event_type(),
            "fetch_started"
        );
        assert_eq!(
            EngineEvent::JokeLoaded {
                token,
                joke: Joke::new("x")
            }
            .event_type(),
            "joke_loaded"
        );
        assert_eq!(EngineEvent::Shutdown.event_type(), "shutdown");
    }
}
