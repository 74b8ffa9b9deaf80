//! Message processing
//!
//! Drives a message through the TEA update function, following up chained
//! messages, firing haptic pulses and dispatching actions.

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::services::{Clipboard, Exporter, Services};
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<C, E>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    services: &Services<C, E>,
) where
    C: Clipboard + Send + Sync + 'static,
    E: Exporter + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(duration_ms) = result.haptic {
            services.haptics.pulse(duration_ms);
        }

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), services);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
