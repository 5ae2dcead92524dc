//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use cronos_app::message::Message;
use cronos_app::process::process_message;
use cronos_app::{signals, AppState};
use cronos_client::{AnalyzeApi, HttpAnalyzeClient};
use cronos_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the terminal console until the user quits
pub async fn run(mut state: AppState) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let api = Arc::new(HttpAnalyzeClient::new(
        state.api_base.clone(),
        state.settings.request_timeout(),
    )?);
    info!("Analysis service: {}", state.api_base.as_str());

    // Unified message channel (analysis results, signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(msg_tx.clone());

    let mut term = ratatui::init();
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, api);
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<A>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    api: Arc<A>,
) -> Result<()>
where
    A: AnalyzeApi + Send + Sync + 'static,
{
    while !state.should_quit {
        // Completed analyses and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &api);
        }

        // The form always fits on screen; a new report already starts at
        // the top of its panel.
        let _ = state.take_scroll_request();

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &api);
        }
    }

    Ok(())
}
