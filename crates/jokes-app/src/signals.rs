//! OS signal handling for graceful shutdown
//!
//! The first SIGINT/SIGTERM asks for whatever the frontend chose as its
//! [`SignalAction`]; any further signal quits immediately. Both tasks stop
//! once the engine flips its shutdown watch.

use tokio::sync::{mpsc, watch};

use crate::message::Message;
use jokes_core::prelude::*;

/// What the first termination signal asks the engine to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalAction {
    /// Quit right away, abandoning any outstanding fetch
    Quit,
    /// Let the current fetch settle (and report) before quitting
    QuitWhenSettled,
}

impl SignalAction {
    fn message(self) -> Message {
        match self {
            SignalAction::Quit => Message::Quit,
            SignalAction::QuitWhenSettled => Message::QuitWhenSettled,
        }
    }
}

/// Spawn the OS signal listener and the relay turning signals into messages
pub fn spawn_signal_handler(
    tx: mpsc::Sender<Message>,
    shutdown_rx: watch::Receiver<bool>,
    first: SignalAction,
) {
    let (signal_tx, signal_rx) = mpsc::channel(4);
    tokio::spawn(listen(signal_tx, shutdown_rx.clone()));
    tokio::spawn(relay(signal_rx, tx, shutdown_rx, first));
}

/// Forward received signal names into `signals` until shutdown
async fn listen(signals: mpsc::Sender<&'static str>, mut shutdown_rx: watch::Receiver<bool>) {
    let mut os = match OsSignals::new() {
        Ok(os) => os,
        Err(e) => {
            error!("Signal handler error: {}", e);
            return;
        }
    };

    loop {
        tokio::select! {
            received = os.recv() => match received {
                Ok(name) => {
                    if signals.send(name).await.is_err() {
                        return;
                    }
                }
                Err(e) => {
                    error!("Signal handler error: {}", e);
                    return;
                }
            },
            _ = shutdown_rx.changed() => return,
        }
    }
}

/// Turn signal arrivals into quit messages for the engine
async fn relay(
    mut signals: mpsc::Receiver<&'static str>,
    tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
    first: SignalAction,
) {
    let mut next = first.message();

    loop {
        if *shutdown_rx.borrow() {
            return;
        }

        let name = tokio::select! {
            received = signals.recv() => match received {
                Some(name) => name,
                None => return,
            },
            _ = shutdown_rx.changed() => {
                debug!("Signal relay stopping");
                return;
            }
        };

        info!("Received {}, requesting {:?}", name, next);
        let message = std::mem::replace(&mut next, Message::Quit);
        if tx.send(message).await.is_err() {
            return;
        }
    }
}

#[cfg(unix)]
struct OsSignals {
    sigint: tokio::signal::unix::Signal,
    sigterm: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl OsSignals {
    fn new() -> Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        let sigint = signal(SignalKind::interrupt())
            .map_err(|e| Error::terminal(format!("Failed to create SIGINT handler: {}", e)))?;
        let sigterm = signal(SignalKind::terminate())
            .map_err(|e| Error::terminal(format!("Failed to create SIGTERM handler: {}", e)))?;
        Ok(Self { sigint, sigterm })
    }

    async fn recv(&mut self) -> Result<&'static str> {
        tokio::select! {
            _ = self.sigint.recv() => Ok("SIGINT"),
            _ = self.sigterm.recv() => Ok("SIGTERM"),
        }
    }
}

#[cfg(windows)]
struct OsSignals;

#[cfg(windows)]
impl OsSignals {
    fn new() -> Result<Self> {
        Ok(Self)
    }

    async fn recv(&mut self) -> Result<&'static str> {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
        Ok("Ctrl+C")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct Relay {
        signals: mpsc::Sender<&'static str>,
        messages: mpsc::Receiver<Message>,
        shutdown: watch::Sender<bool>,
        task: tokio::task::JoinHandle<()>,
    }

    fn spawn_relay(first: SignalAction) -> Relay {
        let (signals, signal_rx) = mpsc::channel(4);
        let (tx, messages) = mpsc::channel(4);
        let (shutdown, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(relay(signal_rx, tx, shutdown_rx, first));
        Relay {
            signals,
            messages,
            shutdown,
            task,
        }
    }

    async fn next_message(relay: &mut Relay) -> Message {
        tokio::time::timeout(Duration::from_secs(1), relay.messages.recv())
            .await
            .expect("message in time")
            .expect("relay alive")
    }

    #[tokio::test]
    async fn test_first_signal_quits_in_interactive_mode() {
        let mut relay = spawn_relay(SignalAction::Quit);
        relay.signals.send("SIGINT").await.unwrap();

        assert!(matches!(next_message(&mut relay).await, Message::Quit));
    }

    #[tokio::test]
    async fn test_first_signal_waits_for_settle_then_second_forces_quit() {
        let mut relay = spawn_relay(SignalAction::QuitWhenSettled);

        relay.signals.send("SIGTERM").await.unwrap();
        assert!(matches!(
            next_message(&mut relay).await,
            Message::QuitWhenSettled
        ));

        relay.signals.send("SIGTERM").await.unwrap();
        assert!(matches!(next_message(&mut relay).await, Message::Quit));
    }

    #[tokio::test]
    async fn test_relay_stops_on_shutdown() {
        let mut relay = spawn_relay(SignalAction::Quit);
        relay.shutdown.send(true).unwrap();

        tokio::time::timeout(Duration::from_secs(1), relay.task)
            .await
            .expect("relay exits after shutdown")
            .unwrap();
        assert!(relay.messages.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_spawned_handler_is_quiet_without_signals() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        spawn_signal_handler(tx, shutdown_rx, SignalAction::Quit);
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(rx.try_recv().is_err());
        shutdown_tx.send(true).unwrap();
    }
}
