//! Haptic feedback
//!
//! Terminals have no vibration motor, so the only real implementation is the
//! bell. Pulses are fire-and-forget and never fail.

use std::io::{IsTerminal, Write};

/// Pulse for ordinary interactions (focus, opening the picker)
pub const PULSE_DEFAULT: u64 = 15;
/// Pulse for page navigation
pub const PULSE_NAVIGATION: u64 = 20;
/// Pulse for select, copy and export
pub const PULSE_SELECT: u64 = 30;
/// Pulse for starting a generation
pub const PULSE_GENERATE: u64 = 50;

/// Fire-and-forget feedback pulse
pub trait Haptics: Send + Sync {
    fn pulse(&self, duration_ms: u64);
}

/// Feedback disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn pulse(&self, _duration_ms: u64) {}
}

/// Rings the terminal bell on stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl Haptics for TerminalBell {
    fn pulse(&self, duration_ms: u64) {
        let mut stderr = std::io::stderr();
        if !stderr.is_terminal() {
            return;
        }
        if let Err(e) = stderr.write_all(b"\x07").and_then(|_| stderr.flush()) {
            tracing::trace!("Bell for {}ms pulse failed: {}", duration_ms, e);
        }
    }
}

/// Haptics implementation for the `feedback.haptics` setting
pub fn from_settings(enabled: bool) -> Box<dyn Haptics> {
    if enabled {
        Box::new(TerminalBell)
    } else {
        Box::new(NoHaptics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulses_never_panic() {
        NoHaptics.pulse(PULSE_GENERATE);
        TerminalBell.pulse(PULSE_SELECT);
        from_settings(true).pulse(PULSE_DEFAULT);
        from_settings(false).pulse(PULSE_NAVIGATION);
    }

    #[test]
    fn test_pulse_durations_are_ordered() {
        assert!(PULSE_DEFAULT < PULSE_NAVIGATION);
        assert!(PULSE_NAVIGATION < PULSE_SELECT);
        assert!(PULSE_SELECT < PULSE_GENERATE);
    }
}
