//! Count input and generation request handlers

use dialgen_core::prelude::*;
use dialgen_core::{parse_count, ResultSet};

use crate::services::haptics::{PULSE_DEFAULT, PULSE_GENERATE};
use crate::state::{AppState, Focus};

use super::{UpdateAction, UpdateResult};

/// Replace the count input text and clear any stale error
pub fn handle_count_input(state: &mut AppState, text: String) -> UpdateResult {
    state.count_input = text;
    state.generation.error = None;
    UpdateResult::none()
}

/// Validate the count and start a generation request
///
/// Invalid input is reported under the count input without touching the
/// current results. A request already in flight wins; the new one is ignored.
pub fn handle_generate(state: &mut AppState) -> UpdateResult {
    if state.generation.is_in_flight() {
        debug!("Generate ignored: request already in flight");
        return UpdateResult::none();
    }

    let count = match parse_count(&state.count_input) {
        Ok(count) => count,
        Err(e) => {
            debug!("Rejected count input {:?}: {}", state.count_input, e);
            state.generation.error = Some(e.user_message());
            return UpdateResult::none().with_haptic(PULSE_DEFAULT);
        }
    };

    let Some(country) = state.selected_country().cloned() else {
        warn!("No country selected");
        state.generation.error = Some("select a country first".to_string());
        return UpdateResult::none();
    };

    let Some(request_id) = state.generation.begin() else {
        return UpdateResult::none();
    };

    // The previous result set is discarded as soon as a new request starts
    state.results.clear();

    info!(
        "Generating {} numbers for {} (request {})",
        count, country.name, request_id
    );

    UpdateResult::action(UpdateAction::Generate {
        request_id,
        country,
        count,
        seed: state.settings.generator.seed,
        yield_ms: state.settings.generator.yield_ms,
    })
    .with_haptic(PULSE_GENERATE)
}

/// Store a finished result set
pub fn handle_generation_completed(
    state: &mut AppState,
    request_id: u64,
    results: ResultSet,
) -> UpdateResult {
    if !state.generation.finish(request_id) {
        debug!("Dropping stale generation result {}", request_id);
        return UpdateResult::none();
    }

    debug!(
        "Request {} completed with {} numbers",
        request_id,
        results.len()
    );
    state.results.set_results(results);
    state.focus = Focus::Results;
    UpdateResult::none()
}

/// Surface a generation failure; no partial result is kept
pub fn handle_generation_failed(
    state: &mut AppState,
    request_id: u64,
    error: String,
) -> UpdateResult {
    if !state.generation.finish(request_id) {
        debug!("Dropping stale generation failure {}", request_id);
        return UpdateResult::none();
    }

    warn!("Request {} failed: {}", request_id, error);
    state.results.clear();
    state.generation.error = Some(error);
    UpdateResult::none()
}
