//! Message types for the application (TEA pattern)

use std::path::PathBuf;
use std::time::Instant;

use chrono::{DateTime, Utc};
use dialgen_core::ResultSet;

use crate::input_key::InputKey;

/// What a clipboard write was for.
///
/// Both variants carry the `generated_at` stamp of the result set the text
/// came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    /// One number, by global index into the result set
    Number {
        index: usize,
        generated_at: DateTime<Utc>,
    },
    /// The whole result set
    All { generated_at: DateTime<Utc> },
}

impl CopyTarget {
    /// Stamp of the result set this copy was taken from
    pub fn generated_at(&self) -> DateTime<Utc> {
        match self {
            CopyTarget::Number { generated_at, .. } | CopyTarget::All { generated_at } => {
                *generated_at
            }
        }
    }
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic redraws (expiring markers)
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    /// Move focus between the count input and the result list
    ToggleFocus,

    // ─────────────────────────────────────────────────────────
    // Generation Messages
    // ─────────────────────────────────────────────────────────
    /// Replace the count input text
    CountInput { text: String },

    /// Validate the count and start a generation request
    Generate,

    /// Generator finished for `request_id`
    GenerationCompleted { request_id: u64, results: ResultSet },

    /// Generator failed for `request_id`; `error` is user-facing text
    GenerationFailed { request_id: u64, error: String },

    // ─────────────────────────────────────────────────────────
    // Result Browser Messages
    // ─────────────────────────────────────────────────────────
    /// Move the result cursor up one row
    ResultCursorUp,
    /// Move the result cursor down one row
    ResultCursorDown,
    /// Next result page
    NextResultPage,
    /// Previous result page
    PrevResultPage,
    /// First result page
    FirstResultPage,
    /// Last result page
    LastResultPage,

    /// Copy the number under the cursor
    CopySelected,
    /// Copy the number at a global index
    CopyNumber { index: usize },
    /// Copy every number, newline-joined
    CopyAll,
    /// Write every number to a text file
    Export,

    /// Clipboard write finished
    CopySucceeded {
        target: CopyTarget,
        copied_at: Instant,
    },
    /// Clipboard write failed
    CopyFailed { target: CopyTarget, error: String },

    /// Export file written
    ExportCompleted { path: PathBuf },
    /// Export failed
    ExportFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Country Picker Messages
    // ─────────────────────────────────────────────────────────
    /// Open the country picker modal
    OpenCountryPicker,
    /// Close the picker without changing the selection
    CloseCountryPicker,
    /// Replace the picker search query
    PickerQuery { text: String },
    /// Move the picker cursor up
    PickerUp,
    /// Move the picker cursor down
    PickerDown,
    /// Next picker page
    PickerNextPage,
    /// Previous picker page
    PickerPrevPage,
    /// First picker page
    PickerFirstPage,
    /// Last picker page
    PickerLastPage,
    /// Select the highlighted picker entry
    PickerConfirm,
    /// Select a country by identifier and close the picker
    SelectCountry { id: String },
}
