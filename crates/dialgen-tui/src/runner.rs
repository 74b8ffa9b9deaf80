//! TUI runner - main event loop

use tokio::sync::mpsc;

use dialgen_app::message::Message;
use dialgen_app::process::process_message;
use dialgen_app::services::{Clipboard, Exporter, Services};
use dialgen_app::signals;
use dialgen_app::state::AppState;
use dialgen_app::DefaultServices;
use dialgen_core::prelude::*;

use crate::{event, render, terminal};

/// Run the interactive TUI until the user quits
pub async fn run(mut state: AppState) -> Result<()> {
    terminal::install_panic_hook();

    let services = DefaultServices::system(state.settings.feedback.haptics);
    info!(
        "Starting TUI: country={}, count={}, {} countries",
        state.selected_country_id,
        state.count_input,
        state.directory.len()
    );

    let mut term = ratatui::init();

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &services);

    ratatui::restore();

    if let Err(e) = &result {
        error!("TUI loop exited with error: {}", e);
    } else {
        info!("TUI exited normally");
    }
    result
}

fn run_loop<C, E>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    services: &Services<C, E>,
) -> Result<()>
where
    C: Clipboard + Send + Sync + 'static,
    E: Exporter + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Results from background tasks and the signal handler
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, services);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, services);
        }
    }

    Ok(())
}
