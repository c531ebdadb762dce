//! Headless mode runner - main event loop without TUI
//!
//! Drives the engine from stdin commands and prints every engine event to
//! stdout as NDJSON.

use std::io::{BufRead, Write};

use tokio::sync::{broadcast, mpsc};
use tracing::{error, info, warn};

use jokes_app::{Engine, EngineEvent, JokeSource, Message, SignalAction};
use jokes_core::prelude::*;
use jokes_core::RequestToken;

use super::HeadlessEvent;

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless<S>(engine: Engine<S>) -> Result<()>
where
    S: JokeSource + Sync + 'static,
{
    info!("Joke dispenser starting in HEADLESS mode");
    info!("Endpoint: {}", engine.state.endpoint);

    // First signal lets the in-flight fetch report before shutdown
    engine.install_signal_handler(SignalAction::QuitWhenSettled);

    // Stdin is blocking, so it gets its own thread
    let stdin_tx = engine.msg_sender();
    std::thread::spawn(move || {
        read_commands(std::io::stdin().lock(), stdin_tx);
    });

    let mut stdout = std::io::stdout();
    let result = run_with_output(engine, &mut stdout).await;

    info!("Joke dispenser headless mode exiting");
    result
}

/// Start the engine and emit events to `out` until a quit is processed.
///
/// Callers feed commands through `engine.msg_sender()`.
pub async fn run_with_output<S, W>(mut engine: Engine<S>, out: &mut W) -> Result<()>
where
    S: JokeSource + Sync + 'static,
    W: Write,
{
    let mut events = engine.subscribe();

    // Mount fetch
    engine.start();
    emit_pending(&mut events, engine.state.latest_token, out);

    while !engine.should_quit() {
        if !engine.process_next().await {
            info!("Message channel closed");
            break;
        }
        emit_pending(&mut events, engine.state.latest_token, out);
    }

    engine.shutdown();
    emit_pending(&mut events, engine.state.latest_token, out);

    Ok(())
}

/// Write every queued engine event
fn emit_pending<W: Write>(
    events: &mut broadcast::Receiver<EngineEvent>,
    latest: RequestToken,
    out: &mut W,
) {
    loop {
        match events.try_recv() {
            Ok(event) => HeadlessEvent::from_engine_event(event, latest).emit(out),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output fell behind, {} events dropped", skipped);
            }
            Err(_) => break,
        }
    }
}

/// Read one command per line and forward it to the message channel.
///
/// On EOF the runner is asked to quit once the current fetch settles.
fn read_commands<R: BufRead>(reader: R, msg_tx: mpsc::Sender<Message>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };

        let trimmed = line.trim();
        let message = match trimmed {
            "n" | "fetch" => {
                info!("Stdin: fetch requested");
                Message::FetchJoke
            }
            "q" | "quit" => {
                info!("Stdin: quit requested");
                let _ = forward(&msg_tx, Message::Quit);
                return;
            }
            "" => continue,
            _ => {
                warn!("Unknown stdin command: {}", trimmed);
                continue;
            }
        };

        if let Err(e) = forward(&msg_tx, message) {
            warn!("{}; stdin reader stopping", e);
            return;
        }
    }

    info!("Stdin closed, quitting once settled");
    let _ = forward(&msg_tx, Message::QuitWhenSettled);
}

fn forward(msg_tx: &mpsc::Sender<Message>, message: Message) -> Result<()> {
    msg_tx
        .blocking_send(message)
        .map_err(|_| Error::ChannelClosed)
}
