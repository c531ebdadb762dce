//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use jokes_core::AppPhase;

use super::{fetch, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::QuitWhenSettled => {
            state.quit_when_settled = true;
            state.quit_if_settled();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Click { column, row } => {
            let on_button = state
                .button_area
                .map(|area| area.contains(column, row))
                .unwrap_or(false);
            if on_button {
                UpdateResult::message(Message::FetchJoke)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick_spinner();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Fetch Messages
        // ─────────────────────────────────────────────────────────
        Message::FetchJoke => fetch::handle_fetch_joke(state),

        Message::JokeFetched { token, joke } => fetch::handle_joke_fetched(state, token, joke),

        Message::JokeFetchFailed { token, error } => {
            fetch::handle_joke_fetch_failed(state, token, error)
        }
    }
}
