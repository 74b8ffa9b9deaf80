//! Settings loading and the default config file

use std::path::{Path, PathBuf};

use dialgen_core::prelude::*;

use super::types::Settings;

const APP_DIR: &str = "dialgen";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG: &str = r#"# dialgen configuration

# Country selected at startup (identifier, e.g. "us", "gb", "jp")
# default_country = "us"

[generator]
default_count = 10      # Initial value of the count input
# seed = 42             # Fixed seed for reproducible output
yield_ms = 100          # Delay before generation starts

[ui]
results_page_size = 50
countries_page_size = 30
copied_flash_ms = 1500
copied_all_flash_ms = 2000

[export]
# directory = "."       # Where exported .txt files are written

[feedback]
haptics = false         # Ring the terminal bell on actions

# Extra countries, appended after the built-in list
# [[countries]]
# id = "xx"
# name = "Example"
# dial_code = "+999"
# rule = { length = 8, prefixes = ["5"], groups = [4, 4] }
"#;

/// Default config file location, `<config dir>/dialgen/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Resolve an explicit `--config` path or fall back to the default location
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path(),
    }
}

/// Load settings from a config file
///
/// A missing, unreadable or unparsable file yields defaults.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings from `--config` or the default location
pub fn load_settings_from(explicit: Option<&Path>) -> Settings {
    match resolve_config_path(explicit) {
        Some(path) => load_settings(&path),
        None => {
            debug!("No config directory available, using defaults");
            Settings::default()
        }
    }
}

/// Write the commented default config file
///
/// Returns `Ok(false)` without touching anything when the file already exists.
pub fn init_config(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        info!("Config file already exists at {:?}", config_path);
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(true)
}
