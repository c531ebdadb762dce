//! Main TUI runner - entry point and event loop
//!
//! - `run`: sets up the terminal, starts the engine, restores on exit
//! - `run_loop`: drains engine messages, renders, polls terminal input

use jokes_app::{Engine, SignalAction};
use jokes_client::JokeSource;
use jokes_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI application until the user quits
pub async fn run<S>(mut engine: Engine<S>) -> Result<()>
where
    S: JokeSource + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mouse = engine.state.settings.ui.mouse;

    // Initialize terminal
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    if mouse {
        if let Err(e) = terminal::enable_mouse_capture() {
            warn!("{}; the button is keyboard-only", e);
        }
    }

    // SIGINT/SIGTERM quit right away
    engine.install_signal_handler(SignalAction::Quit);

    // Mount fetch
    engine.start();

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();

    if mouse {
        if let Err(e) = terminal::disable_mouse_capture() {
            warn!("{}", e);
        }
    }

    // Restore terminal
    let restored = ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()));

    info!("TUI exited");
    result.and(restored)
}

/// Main event loop
fn run_loop<S>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<S>) -> Result<()>
where
    S: JokeSource + Sync + 'static,
{
    while !engine.should_quit() {
        // Fetch results, signals
        engine.drain_pending_messages();

        // Render
        terminal
            .draw(|frame| render::view(frame, &mut engine.state))
            .context("Failed to draw frame")?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
