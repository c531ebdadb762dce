//! Core domain type definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Endpoint queried when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/api/joke";

/// The single user-visible failure message.
///
/// Network errors, non-2xx statuses and undecodable bodies all collapse into
/// this text; the underlying cause only goes to the log.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch joke. Please ensure the backend is running.";

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Engine created, mount fetch not yet issued
    #[default]
    Initializing,
    /// Event loop running
    Running,
    /// Application is shutting down
    Quitting,
}

/// A joke as displayed to the user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Joke(String);

impl Joke {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Joke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<JokePayload> for Joke {
    fn from(payload: JokePayload) -> Self {
        Self(payload.joke)
    }
}

/// Wire format of a successful `/api/joke` response: `{ "joke": "<string>" }`
///
/// Unknown fields are ignored; a missing or non-string `joke` is a decode error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JokePayload {
    pub joke: String,
}

impl JokePayload {
    /// Parse a response body
    pub fn parse(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }
}

/// Monotonically increasing identifier attached to every issued fetch.
///
/// Only a response carrying the most recently issued token may change the
/// view; anything older is a stale response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Token value that no issued request ever carries
    pub const NONE: RequestToken = RequestToken(0);

    /// The token following this one
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1).max(1))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_parses_joke_field() {
        let payload = JokePayload::parse(r#"{"joke":"What do you call a fake noodle? An impasta."}"#)
            .unwrap();
        assert_eq!(payload.joke, "What do you call a fake noodle? An impasta.");
    }

    #[test]
    fn test_payload_ignores_extra_fields() {
        let payload = JokePayload::parse(r#"{"joke":"A stick.","id":7}"#).unwrap();
        assert_eq!(Joke::from(payload).as_str(), "A stick.");
    }

    #[test]
    fn test_payload_missing_joke_is_error() {
        assert!(JokePayload::parse(r#"{"setup":"knock knock"}"#).is_err());
    }

    #[test]
    fn test_payload_non_string_joke_is_error() {
        assert!(JokePayload::parse(r#"{"joke":42}"#).is_err());
    }

    #[test]
    fn test_payload_malformed_json_is_error() {
        assert!(JokePayload::parse("<html>502 Bad Gateway</html>").is_err());
    }

    #[test]
    fn test_request_token_is_monotonic() {
        let first = RequestToken::NONE.next();
        let second = first.next();
        assert!(second > first);
        assert_ne!(first, RequestToken::NONE);
        assert_eq!(first.value(), 1);
        assert_eq!(second.value(), 2);
    }

    #[test]
    fn test_request_token_never_wraps_to_none() {
        let last = RequestToken(u64::MAX);
        assert_ne!(last.next(), RequestToken::NONE);
    }

    #[test]
    fn test_joke_display_and_serde_transparent() {
        let joke = Joke::new("Fsh.");
        assert_eq!(joke.to_string(), "Fsh.");
        assert_eq!(serde_json::to_string(&joke).unwrap(), "\"Fsh.\"");
    }

    #[test]
    fn test_app_phase_default() {
        assert_eq!(AppPhase::default(), AppPhase::Initializing);
    }
}
