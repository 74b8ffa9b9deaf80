//! dialgen Library
//!
//! Phone number generator with a terminal UI and a headless mode.

pub mod app;
pub mod headless;

// Re-export main entry points
pub use app::{run_tui, LaunchOptions};
pub use headless::{list_countries, run_headless, HeadlessOptions};
