//! Configuration file parsing for dialgen
//!
//! Settings live in `<config dir>/dialgen/config.toml` unless `--config`
//! points elsewhere.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config, load_settings, load_settings_from, resolve_config_path,
};
pub use types::*;
