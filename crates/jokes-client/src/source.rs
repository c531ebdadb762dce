//! The joke source seam and per-fetch error type

use jokes_core::Joke;
use thiserror::Error;

/// Result of a single fetch
pub type FetchResult = std::result::Result<Joke, FetchError>;

/// Why a fetch failed.
///
/// The distinction is only written to the log; the view collapses every
/// variant into the same user-visible message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, reset, or body read failure
    #[error("network error: {0}")]
    Network(String),

    /// The configured request timeout elapsed
    #[error("request timed out")]
    Timeout,

    /// Server answered with a non-2xx status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Body was not JSON, or had no string `joke` field
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Short machine-readable name, used in structured log fields
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Timeout => "timeout",
            FetchError::Status(_) => "status",
            FetchError::Decode(_) => "decode",
        }
    }
}

/// Something that can produce one joke per call.
///
/// `JokeSource` is the `Send` variant used by the event loop, which spawns
/// every fetch onto the tokio runtime.
#[trait_variant::make(JokeSource: Send)]
pub trait LocalJokeSource {
    /// Fetch a single joke
    async fn fetch_joke(&self) -> FetchResult;

    /// Human-readable description of where jokes come from (e.g. the URL)
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        assert_eq!(FetchError::Status(500).to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(FetchError::network("refused").kind(), "network");
        assert_eq!(FetchError::Timeout.kind(), "timeout");
        assert_eq!(FetchError::Status(404).kind(), "status");
        assert_eq!(FetchError::decode("eof").kind(), "decode");
    }
}
