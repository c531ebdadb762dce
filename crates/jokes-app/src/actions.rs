//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use jokes_client::JokeSource;
use jokes_core::RequestToken;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, source: Arc<S>)
where
    S: JokeSource + Sync + 'static,
{
    match action {
        UpdateAction::FetchJoke { token } => {
            spawn_fetch(token, source, msg_tx);
        }
    }
}

/// Run one fetch in the background and report the outcome tagged with `token`.
///
/// In-flight fetches are never cancelled; a superseded one still reports and
/// the update loop drops its result.
pub fn spawn_fetch<S>(
    token: RequestToken,
    source: Arc<S>,
    msg_tx: mpsc::Sender<Message>,
) -> tokio::task::JoinHandle<()>
where
    S: JokeSource + Sync + 'static,
{
    tokio::spawn(async move {
        let message = match source.fetch_joke().await {
            Ok(joke) => {
                info!(%token, "Fetched joke from {}", source.describe());
                Message::JokeFetched { token, joke }
            }
            Err(e) => {
                error!(%token, kind = e.kind(), "Error fetching joke: {}", e);
                Message::JokeFetchFailed { token, error: e }
            }
        };

        if msg_tx.send(message).await.is_err() {
            debug!(%token, "Message channel closed before fetch result was delivered");
        }
    })
}
