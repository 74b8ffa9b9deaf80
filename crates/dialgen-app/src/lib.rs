//! dialgen-app - Application state and orchestration for dialgen
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: `AppState` is the model, `Message` the events, `handler::update`
//! the pure transition function and `UpdateAction` the side effects that
//! `actions` runs on tokio tasks. It also owns configuration loading and the
//! platform service traits (clipboard, export, haptics).

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod services;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{CopyTarget, Message};
pub use services::{DefaultServices, Services};
pub use state::{AppPhase, AppState, Focus, UiMode};
