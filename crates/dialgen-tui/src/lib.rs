//! dialgen-tui - Terminal UI for dialgen
//!
//! This crate provides the ratatui-based terminal interface. It depends on
//! `dialgen-app` for state management (TEA pattern) and `dialgen-core` for
//! the generator types.
//!
//! ## Public API
//!
//! - [`run()`]: Launch the interactive TUI with the given settings
//! - [`render::view()`]: Draw one frame from an `AppState`

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
