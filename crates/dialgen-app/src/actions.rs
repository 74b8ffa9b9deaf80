//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action runs on its own tokio task and reports back through the
//! message channel. Nothing here touches `AppState`.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use dialgen_core::prelude::*;
use dialgen_core::{generate, CountryPhoneFormat, RngSource};

use crate::message::Message;
use crate::services::{Clipboard, Exporter, Services};
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<C, E>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    services: &Services<C, E>,
) where
    C: Clipboard + Send + Sync + 'static,
    E: Exporter + Send + Sync + 'static,
{
    match action {
        UpdateAction::Generate {
            request_id,
            country,
            count,
            seed,
            yield_ms,
        } => {
            tokio::spawn(async move {
                let msg = run_generation(request_id, country, count, seed, yield_ms).await;
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::CopyToClipboard { text, target } => {
            let clipboard = services.clipboard.clone();
            tokio::spawn(async move {
                let msg = match clipboard.set_text(&text).await {
                    Ok(()) => Message::CopySucceeded {
                        target,
                        copied_at: Instant::now(),
                    },
                    Err(e) => Message::CopyFailed {
                        target,
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::Export {
            directory,
            file_name,
            content,
        } => {
            let exporter = services.exporter.clone();
            tokio::spawn(async move {
                let msg = match exporter.export(&directory, &file_name, &content).await {
                    Ok(path) => Message::ExportCompleted { path },
                    Err(e) => Message::ExportFailed {
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }
    }
}

/// Yield so the busy state renders, then run the generator on a blocking task
pub async fn run_generation(
    request_id: u64,
    country: CountryPhoneFormat,
    count: u32,
    seed: Option<u64>,
    yield_ms: u64,
) -> Message {
    if yield_ms > 0 {
        tokio::time::sleep(Duration::from_millis(yield_ms)).await;
    }

    let country_name = country.name.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        let mut rng = RngSource::from_seed_option(seed);
        generate(&country, count, &mut rng)
    })
    .await;

    match outcome {
        Ok(Ok(results)) => Message::GenerationCompleted {
            request_id,
            results,
        },
        Ok(Err(e)) => {
            warn!("Generation request {} failed: {}", request_id, e);
            Message::GenerationFailed {
                request_id,
                error: e.user_message(),
            }
        }
        Err(e) => {
            error!("Generation task for request {} panicked: {}", request_id, e);
            Message::GenerationFailed {
                request_id,
                error: Error::generation_failure(country_name, "task aborted").user_message(),
            }
        }
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        debug!("Message channel closed; dropping action result");
    }
}
