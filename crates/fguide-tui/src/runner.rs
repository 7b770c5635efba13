//! Main TUI runner - entry point and event loop

use fguide_app::config::Settings;
use fguide_app::message::Message;
use fguide_app::{process, AppState};
use fguide_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, startup, terminal};

/// Run the TUI application until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    // Initialize terminal (installs the panic hook)
    let mut term = terminal::init()?;

    let mut state = AppState::with_settings(settings);

    // Unified message channel (signal handler and spawned tasks)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    fguide_app::signals::spawn_signal_handler(msg_tx);

    let started = startup::startup_guide(&mut state);
    debug!("Startup finished: {:?}", started);

    let result = run_loop(&mut term, &mut state, msg_rx);

    // Restore terminal
    terminal::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (from signal handler, etc.)
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process::process_message(state, message);
        }
    }

    info!("Guide closed");
    Ok(())
}
