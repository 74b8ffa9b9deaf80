//! Platform services used by the action executor
//!
//! ## Key Components
//!
//! - [`Clipboard`]: write text to the system clipboard (OSC 52 by default)
//! - [`Exporter`]: write result files to disk
//! - [`Haptics`]: fire-and-forget feedback pulses
//!
//! Async services are generic parameters of [`Services`] so tests can swap in
//! recording fakes.

pub mod clipboard;
pub mod exporter;
pub mod haptics;

use std::sync::Arc;

pub use clipboard::{Clipboard, LocalClipboard, Osc52Clipboard};
pub use exporter::{Exporter, FsExporter, LocalExporter};
pub use haptics::{Haptics, NoHaptics, TerminalBell};

/// Service bundle handed to the action executor
pub struct Services<C, E> {
    pub clipboard: Arc<C>,
    pub exporter: Arc<E>,
    pub haptics: Arc<dyn Haptics>,
}

impl<C, E> Clone for Services<C, E> {
    fn clone(&self) -> Self {
        Self {
            clipboard: Arc::clone(&self.clipboard),
            exporter: Arc::clone(&self.exporter),
            haptics: Arc::clone(&self.haptics),
        }
    }
}

impl<C, E> Services<C, E> {
    pub fn new(clipboard: C, exporter: E, haptics: Box<dyn Haptics>) -> Self {
        Self {
            clipboard: Arc::new(clipboard),
            exporter: Arc::new(exporter),
            haptics: Arc::from(haptics),
        }
    }
}

/// Production services
pub type DefaultServices = Services<Osc52Clipboard, FsExporter>;

impl DefaultServices {
    /// Terminal clipboard, filesystem exporter and the configured haptics
    pub fn system(haptics_enabled: bool) -> Self {
        Services::new(
            Osc52Clipboard::new(),
            FsExporter::new(),
            haptics::from_settings(haptics_enabled),
        )
    }
}
