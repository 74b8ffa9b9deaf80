//! Country picker handlers

use dialgen_core::prelude::*;

use crate::message::Message;
use crate::services::haptics::{PULSE_DEFAULT, PULSE_NAVIGATION, PULSE_SELECT};
use crate::state::{AppState, UiMode};

use super::UpdateResult;

/// Open the picker with an empty query on the first page
pub fn handle_open(state: &mut AppState) -> UpdateResult {
    state.picker.open(&state.directory);
    state.ui_mode = UiMode::CountryPicker;
    UpdateResult::none().with_haptic(PULSE_DEFAULT)
}

pub fn handle_close(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Main;
    UpdateResult::none()
}

/// Re-run the search; the page always resets
pub fn handle_query(state: &mut AppState, text: String) -> UpdateResult {
    state.picker.set_query(&state.directory, text);
    UpdateResult::none()
}

/// Handle cursor and page navigation inside the picker
pub fn handle_navigation(state: &mut AppState, message: Message) -> UpdateResult {
    let picker = &mut state.picker;
    let moved = match message {
        Message::PickerUp => {
            picker.cursor_up();
            false
        }
        Message::PickerDown => {
            picker.cursor_down();
            false
        }
        Message::PickerNextPage => picker.next_page(),
        Message::PickerPrevPage => picker.prev_page(),
        Message::PickerFirstPage => {
            picker.first_page();
            true
        }
        Message::PickerLastPage => {
            picker.last_page();
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

/// Select the highlighted entry
pub fn handle_confirm(state: &AppState) -> UpdateResult {
    let Some(country) = state
        .picker
        .highlighted()
        .and_then(|index| state.directory.get(index))
    else {
        return UpdateResult::none();
    };

    UpdateResult::message(Message::SelectCountry {
        id: country.id.clone(),
    })
}

/// Select a country by identifier and close the picker
pub fn handle_select(state: &mut AppState, id: String) -> UpdateResult {
    let Some(country) = state.directory.by_id(&id) else {
        warn!("Ignoring selection of unknown country {:?}", id);
        return UpdateResult::none();
    };

    info!("Selected {}", country.label());
    state.selected_country_id = country.id.clone();
    state.ui_mode = UiMode::Main;
    UpdateResult::none().with_haptic(PULSE_SELECT)
}
