//! Result browser, copy and export handlers

use std::path::PathBuf;
use std::time::Instant;

use dialgen_core::prelude::*;
use dialgen_core::{export_content, file_name_for};

use crate::message::{CopyTarget, Message};
use crate::services::haptics::{PULSE_NAVIGATION, PULSE_SELECT};
use crate::state::{AppState, CopiedMarker, NoticeLevel};

use super::{UpdateAction, UpdateResult};

/// Handle cursor and page navigation messages
pub fn handle_navigation(state: &mut AppState, message: Message) -> UpdateResult {
    let results = &mut state.results;
    let moved = match message {
        Message::ResultCursorUp => {
            results.cursor_up();
            false
        }
        Message::ResultCursorDown => {
            results.cursor_down();
            false
        }
        Message::NextResultPage => results.next_page(),
        Message::PrevResultPage => results.prev_page(),
        Message::FirstResultPage => {
            results.first_page();
            true
        }
        Message::LastResultPage => {
            results.last_page();
            true
        }
        _ => false,
    };

    if moved {
        UpdateResult::none().with_haptic(PULSE_NAVIGATION)
    } else {
        UpdateResult::none()
    }
}

/// Copy the number under the cursor
pub fn handle_copy_selected(state: &AppState) -> UpdateResult {
    match state.results.selected_index() {
        Some(index) => UpdateResult::message(Message::CopyNumber { index }),
        None => UpdateResult::none(),
    }
}

/// Copy the number at a global index
pub fn handle_copy_number(state: &AppState, index: usize) -> UpdateResult {
    let Some(results) = state.results.results.as_ref() else {
        debug!("Copy ignored: no results");
        return UpdateResult::none();
    };
    let Some(number) = results.numbers.get(index) else {
        debug!("Copy ignored: no number at index {}", index);
        return UpdateResult::none();
    };

    UpdateResult::action(UpdateAction::CopyToClipboard {
        text: number.as_str().to_string(),
        target: CopyTarget::Number {
            index,
            generated_at: results.generated_at,
        },
    })
    .with_haptic(PULSE_SELECT)
}

/// Copy every number, newline-joined
pub fn handle_copy_all(state: &AppState) -> UpdateResult {
    let Some(results) = state.results.results.as_ref().filter(|r| !r.is_empty()) else {
        debug!("Copy all ignored: no results");
        return UpdateResult::none();
    };

    UpdateResult::action(UpdateAction::CopyToClipboard {
        text: results.join_lines(),
        target: CopyTarget::All {
            generated_at: results.generated_at,
        },
    })
    .with_haptic(PULSE_SELECT)
}

/// Write the result set to a text file
pub fn handle_export(state: &AppState) -> UpdateResult {
    let Some(results) = state.results.results.as_ref().filter(|r| !r.is_empty()) else {
        debug!("Export ignored: no results");
        return UpdateResult::none();
    };

    UpdateResult::action(UpdateAction::Export {
        directory: state.settings.export.directory_or_cwd(),
        file_name: file_name_for(results),
        content: export_content(results),
    })
    .with_haptic(PULSE_SELECT)
}

/// Show the "copied" marker or confirmation
///
/// A reply for a result set that has since been replaced leaves the current
/// set unmarked.
pub fn handle_copy_succeeded(
    state: &mut AppState,
    target: CopyTarget,
    copied_at: Instant,
) -> UpdateResult {
    if state.results.generated_at() != Some(target.generated_at()) {
        debug!("Copy reply for a replaced result set, not marking");
        return UpdateResult::none();
    }

    match target {
        CopyTarget::Number { index, .. } => {
            state.results.copied = Some(CopiedMarker {
                index,
                expires_at: copied_at + state.settings.ui.copied_flash(),
            });
        }
        CopyTarget::All { .. } => {
            state.results.copied_all_until = Some(copied_at + state.settings.ui.copied_all_flash());
        }
    }
    UpdateResult::none()
}

/// Copy failures are logged and shown as a muted notice
pub fn handle_copy_failed(state: &mut AppState, target: CopyTarget, error: String) -> UpdateResult {
    warn!("Clipboard write for {:?} failed: {}", target, error);
    state.set_notice(format!("copy failed: {}", error), NoticeLevel::Muted);
    UpdateResult::none()
}

pub fn handle_export_completed(state: &mut AppState, path: PathBuf) -> UpdateResult {
    info!("Exported results to {}", path.display());
    state.set_notice(
        format!("exported to {}", path.display()),
        NoticeLevel::Success,
    );
    UpdateResult::none()
}

pub fn handle_export_failed(state: &mut AppState, error: String) -> UpdateResult {
    error!("Export failed: {}", error);
    state.set_notice(format!("export failed: {}", error), NoticeLevel::Error);
    UpdateResult::none()
}
