//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in:
//! - `generation`: count input and generation lifecycle
//! - `results`: result browser, clipboard and export outcomes
//! - `picker`: country picker

use crate::message::Message;
use crate::services::haptics::PULSE_DEFAULT;
use crate::state::{AppPhase, AppState};

use super::{generation, keys::handle_key, picker, results, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message, action and haptic pulse
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        // Nothing to mutate; the run loop redraws so expiring markers disappear
        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::ToggleFocus => {
            state.focus = state.focus.toggle();
            UpdateResult::none().with_haptic(PULSE_DEFAULT)
        }

        // ─────────────────────────────────────────────────────────
        // Generation
        // ─────────────────────────────────────────────────────────
        Message::CountInput { text } => generation::handle_count_input(state, text),
        Message::Generate => generation::handle_generate(state),
        Message::GenerationCompleted {
            request_id,
            results,
        } => generation::handle_generation_completed(state, request_id, results),
        Message::GenerationFailed { request_id, error } => {
            generation::handle_generation_failed(state, request_id, error)
        }

        // ─────────────────────────────────────────────────────────
        // Result Browser
        // ─────────────────────────────────────────────────────────
        msg @ (Message::ResultCursorUp
        | Message::ResultCursorDown
        | Message::NextResultPage
        | Message::PrevResultPage
        | Message::FirstResultPage
        | Message::LastResultPage) => results::handle_navigation(state, msg),

        Message::CopySelected => results::handle_copy_selected(state),
        Message::CopyNumber { index } => results::handle_copy_number(state, index),
        Message::CopyAll => results::handle_copy_all(state),
        Message::Export => results::handle_export(state),

        Message::CopySucceeded { target, copied_at } => {
            results::handle_copy_succeeded(state, target, copied_at)
        }
        Message::CopyFailed { target, error } => results::handle_copy_failed(state, target, error),
        Message::ExportCompleted { path } => results::handle_export_completed(state, path),
        Message::ExportFailed { error } => results::handle_export_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Country Picker
        // ─────────────────────────────────────────────────────────
        Message::OpenCountryPicker => picker::handle_open(state),
        Message::CloseCountryPicker => picker::handle_close(state),
        Message::PickerQuery { text } => picker::handle_query(state, text),

        msg @ (Message::PickerUp
        | Message::PickerDown
        | Message::PickerNextPage
        | Message::PickerPrevPage
        | Message::PickerFirstPage
        | Message::PickerLastPage) => picker::handle_navigation(state, msg),

        Message::PickerConfirm => picker::handle_confirm(state),
        Message::SelectCountry { id } => picker::handle_select(state, id),
    }
}
