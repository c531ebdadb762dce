//! Message processing: runs the TEA update loop and dispatches actions

use std::sync::Arc;

use jokes_client::JokeSource;
use tokio::sync::mpsc;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function.
///
/// Follow-up messages are processed immediately; actions are dispatched to
/// background tasks that report back through `msg_tx`.
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    source: &Arc<S>,
) where
    S: JokeSource + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), source.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
