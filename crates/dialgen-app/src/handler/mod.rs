//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes and focus
//! - `generation`: Count input and generation request handlers
//! - `results`: Result browser, copy and export handlers
//! - `picker`: Country picker handlers

pub(crate) mod generation;
pub(crate) mod keys;
pub(crate) mod picker;
pub(crate) mod results;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use dialgen_core::CountryPhoneFormat;

use crate::message::{CopyTarget, Message};

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Run the generator off the event loop
    Generate {
        request_id: u64,
        country: CountryPhoneFormat,
        count: u32,
        /// Fixed seed from configuration, entropy when `None`
        seed: Option<u64>,
        /// Delay before the generator runs
        yield_ms: u64,
    },

    /// Write text to the system clipboard
    CopyToClipboard { text: String, target: CopyTarget },

    /// Write the result set to `<directory>/<file_name>`
    Export {
        directory: PathBuf,
        file_name: String,
        content: String,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
    /// Optional haptic pulse, in milliseconds
    pub haptic: Option<u64>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            ..Self::default()
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            action: Some(action),
            ..Self::default()
        }
    }

    /// Attach a haptic pulse of `duration_ms`
    pub fn with_haptic(mut self, duration_ms: u64) -> Self {
        self.haptic = Some(duration_ms);
        self
    }
}
