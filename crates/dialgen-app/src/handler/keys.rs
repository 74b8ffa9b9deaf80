//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus, UiMode, MAX_COUNT_INPUT_LEN};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::CountryPicker => handle_key_country_picker(state, key),
        UiMode::Main => match state.focus {
            Focus::CountInput => handle_key_count_input(state, key),
            Focus::Results => handle_key_results(key),
        },
    }
}

/// Keys available on the main screen regardless of focus
fn handle_key_main_common(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab | InputKey::BackTab => Some(Message::ToggleFocus),
        InputKey::F(2) | InputKey::CharCtrl('o') => Some(Message::OpenCountryPicker),
        _ => None,
    }
}

/// Handle key events while the count input has focus
fn handle_key_count_input(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(digit) = key.digit() {
        if state.count_input.len() >= MAX_COUNT_INPUT_LEN {
            return None;
        }
        let mut text = state.count_input.clone();
        text.push(digit);
        return Some(Message::CountInput { text });
    }

    match key {
        InputKey::Enter => Some(Message::Generate),

        InputKey::Backspace => {
            let mut text = state.count_input.clone();
            text.pop();
            Some(Message::CountInput { text })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::CountInput {
            text: String::new(),
        }),

        _ => handle_key_main_common(key),
    }
}

/// Handle key events while the result list has focus
fn handle_key_results(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),

        // Cursor
        InputKey::Up | InputKey::Char('k') => Some(Message::ResultCursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ResultCursorDown),

        // Pages
        InputKey::Right | InputKey::PageDown | InputKey::Char('n') => {
            Some(Message::NextResultPage)
        }
        InputKey::Left | InputKey::PageUp | InputKey::Char('p') => Some(Message::PrevResultPage),
        InputKey::Home => Some(Message::FirstResultPage),
        InputKey::End => Some(Message::LastResultPage),

        // Clipboard and export
        InputKey::Enter | InputKey::Char('y') => Some(Message::CopySelected),
        InputKey::Char('Y') => Some(Message::CopyAll),
        InputKey::Char('e') => Some(Message::Export),

        InputKey::Char('g') => Some(Message::Generate),
        InputKey::Char('c') => Some(Message::OpenCountryPicker),

        _ => handle_key_main_common(key),
    }
}

/// Handle key events in the country picker modal
fn handle_key_country_picker(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseCountryPicker),
        InputKey::Enter => Some(Message::PickerConfirm),

        InputKey::Up => Some(Message::PickerUp),
        InputKey::Down => Some(Message::PickerDown),
        InputKey::Right | InputKey::PageDown => Some(Message::PickerNextPage),
        InputKey::Left | InputKey::PageUp => Some(Message::PickerPrevPage),
        InputKey::Home => Some(Message::PickerFirstPage),
        InputKey::End => Some(Message::PickerLastPage),

        InputKey::Backspace => {
            let mut text = state.picker.query.clone();
            text.pop();
            Some(Message::PickerQuery { text })
        }

        InputKey::CharCtrl('u') => Some(Message::PickerQuery {
            text: String::new(),
        }),

        // Type to search
        InputKey::Char(c) => {
            let mut text = state.picker.query.clone();
            text.push(c);
            Some(Message::PickerQuery { text })
        }

        _ => None,
    }
}
