//! Clipboard access
//!
//! The default [`Osc52Clipboard`] asks the terminal to set the clipboard with
//! an OSC 52 escape sequence, which also works over SSH and inside tmux.
//! Format: `ESC ] 52 ; c ; <base64> BEL`.

use std::io::{IsTerminal, Write};

use base64::{engine::general_purpose::STANDARD, Engine};
use dialgen_core::prelude::*;

/// Write UTF-8 text to the system clipboard
#[trait_variant::make(Clipboard: Send)]
pub trait LocalClipboard {
    async fn set_text(&self, text: &str) -> Result<()>;
}

/// Build the OSC 52 sequence for `text`
pub fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text);
    // BEL terminator; some terminals ignore the ST form
    format!("\x1b]52;c;{encoded}\x07")
}

/// Clipboard backed by the terminal via OSC 52 on stderr
#[derive(Debug, Clone, Default)]
pub struct Osc52Clipboard;

impl Osc52Clipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for Osc52Clipboard {
    async fn set_text(&self, text: &str) -> Result<()> {
        let mut stderr = std::io::stderr();
        if !stderr.is_terminal() {
            return Err(Error::clipboard("stderr is not a terminal"));
        }

        stderr
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|_| stderr.flush())
            .map_err(|e| Error::clipboard(format!("failed to write OSC 52 sequence: {}", e)))?;

        trace!("Copied {} bytes via OSC 52", text.len());
        Ok(())
    }
}
