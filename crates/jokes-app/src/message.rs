//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use jokes_client::FetchError;
use jokes_core::{Joke, RequestToken};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Left mouse button pressed at a terminal cell
    Click { column: u16, row: u16 },

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Force quit (q, Esc, Ctrl+C, signal handler)
    Quit,

    /// Quit as soon as the view is no longer loading (headless stdin EOF)
    QuitWhenSettled,

    // ─────────────────────────────────────────────────────────
    // Fetch Messages
    // ─────────────────────────────────────────────────────────
    /// Issue a new fetch ("Get New Joke")
    FetchJoke,

    /// A fetch completed successfully
    JokeFetched { token: RequestToken, joke: Joke },

    /// A fetch failed; `error` is kept for diagnostics only
    JokeFetchFailed {
        token: RequestToken,
        error: FetchError,
    },
}
