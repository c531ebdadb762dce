//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the joke source and
//! the event broadcaster, so both frontends drive the exact same logic.

use std::sync::Arc;

use jokes_client::JokeSource;
use jokes_core::{AppPhase, RequestToken};
use tokio::sync::{broadcast, mpsc, watch};
use tracing::info;

use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals::{self, SignalAction};
use crate::state::{AppState, ViewState};

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone)]
struct StateSnapshot {
    latest_token: RequestToken,
    results_applied: u64,
    stale_discarded: u64,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            latest_token: state.latest_token,
            results_applied: state.results_applied,
            stale_discarded: state.stale_discarded,
        }
    }
}

/// Orchestration engine for the joke viewer.
///
/// Encapsulates all state shared between the TUI and headless runners:
/// - TEA state management
/// - Message channel
/// - Joke source used by fetch tasks
/// - Shutdown signaling
/// - Event broadcasting for external consumers
pub struct Engine<S> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, stdin reader, fetch tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Where fetch tasks get their jokes
    source: Arc<S>,

    /// Flipped to `true` on shutdown; the signal tasks watch it
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,

    /// Event broadcaster for external consumers.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl<S> Engine<S>
where
    S: JokeSource + Sync + 'static,
{
    /// Create a new Engine.
    ///
    /// The state starts Idle; call [`Engine::start`] to issue the mount fetch.
    pub fn new(settings: Settings, source: S) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (event_tx, _) = broadcast::channel(256);

        let mut engine = Self {
            state,
            msg_tx,
            msg_rx,
            source: Arc::new(source),
            shutdown_tx,
            shutdown_rx,
            event_tx,
        };
        engine.state.endpoint = engine.source.describe();
        engine
    }

    /// Spawn the OS signal handler.
    ///
    /// The first SIGINT/SIGTERM sends `first`'s message, later ones `Message::Quit`.
    pub fn install_signal_handler(&self, first: SignalAction) {
        signals::spawn_signal_handler(self.msg_tx.clone(), self.shutdown_rx.clone(), first);
    }

    /// Enter the running phase and issue the initial fetch
    pub fn start(&mut self) {
        info!("Engine starting, endpoint {}", self.state.endpoint);
        self.state.phase = AppPhase::Running;
        self.process_message(Message::FetchJoke);
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped. Use `broadcast::error::RecvError::Lagged` to detect this.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, &self.source);

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns `false` once the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// The joke source shared with fetch tasks
    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Initiate shutdown: signal background tasks and notify subscribers.
    ///
    /// Outstanding fetches are not awaited; their results are simply never
    /// processed.
    pub fn shutdown(&mut self) {
        info!(
            in_flight = self.state.in_flight,
            "Engine shutting down"
        );
        self.state.phase = AppPhase::Quitting;
        let _ = self.shutdown_tx.send(true);
        self.emit(EngineEvent::Shutdown);
    }

    /// Emit EngineEvents based on state changes after processing.
    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if post.latest_token != pre.latest_token {
            self.emit(EngineEvent::FetchStarted {
                token: post.latest_token,
            });
        }

        if post.stale_discarded > pre.stale_discarded {
            if let Some(token) = self.state.last_discarded {
                self.emit(EngineEvent::StaleResponseDiscarded { token });
            }
        }

        if post.results_applied > pre.results_applied {
            let token = post.latest_token;
            match &self.state.view {
                ViewState::Loaded(joke) => self.emit(EngineEvent::JokeLoaded {
                    token,
                    joke: joke.clone(),
                }),
                ViewState::Failed(message) => self.emit(EngineEvent::FetchFailed {
                    token,
                    message: message.clone(),
                }),
                ViewState::Idle | ViewState::Loading => {}
            }
        }
    }

    /// Emit a single EngineEvent to all subscribers.
    ///
    /// send() returns Err only if there are no receivers, which is fine.
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}
