//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages
pub fn handle_key(_state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Ctrl+C always quits
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        // "Get New Joke" - never disabled, even while a fetch is in flight
        InputKey::Enter
        | InputKey::Char(' ')
        | InputKey::Char('n')
        | InputKey::Char('r')
        | InputKey::F(5) => Some(Message::FetchJoke),

        _ => None,
    }
}
