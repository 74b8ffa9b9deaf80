//! Application entry points shared by the TUI and headless modes

use std::path::{Path, PathBuf};

use dialgen_app::config::{init_config, load_settings_from, resolve_config_path};
use dialgen_app::{AppState, Settings};
use dialgen_core::prelude::*;
use dialgen_core::{logging, CountryDirectory};

/// Settings sources and command-line overrides
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Explicit config file (`--config`)
    pub config: Option<PathBuf>,
    /// Country key to preselect (`--country`)
    pub country: Option<String>,
    /// Initial count (`--count`)
    pub count: Option<u32>,
    /// Generator seed (`--seed`)
    pub seed: Option<u64>,
    /// Export directory (`--export-dir`)
    pub export_dir: Option<PathBuf>,
}

impl LaunchOptions {
    /// Config file settings with command-line flags applied on top
    pub fn settings(&self) -> Settings {
        let mut settings = load_settings_from(self.config.as_deref());
        if let Some(count) = self.count {
            settings.generator.default_count = count;
        }
        if let Some(seed) = self.seed {
            settings.generator.seed = Some(seed);
        }
        if let Some(dir) = &self.export_dir {
            settings.export.directory = Some(dir.clone());
        }
        settings
    }

    /// Build the initial application state.
    ///
    /// An explicit `--country` that matches nothing is an error; an unknown
    /// `default_country` in the config silently falls back to the first entry.
    pub fn build_state(&self) -> Result<AppState> {
        let mut settings = self.settings();
        let directory = CountryDirectory::with_custom(settings.countries.clone());

        if let Some(key) = &self.country {
            let country = directory
                .find(key)
                .ok_or_else(|| Error::unknown_country(key.as_str()))?;
            settings.default_country = Some(country.id.clone());
        }

        Ok(AppState::with_directory(settings, directory))
    }
}

/// Start file logging; a failure is reported on stderr and otherwise ignored
pub fn init_logging() {
    if let Err(e) = logging::init() {
        eprintln!("dialgen: logging disabled: {}", e);
    }
}

/// Run the interactive TUI
pub async fn run_tui(options: &LaunchOptions) -> Result<()> {
    init_logging();

    let state = options.build_state()?;
    info!(
        "Launching TUI (config: {:?}, seed: {:?})",
        options.config, state.settings.generator.seed
    );

    let result = dialgen_tui::run(state).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("dialgen exiting");
    result
}

/// Write the commented default config file and describe what happened
pub fn write_default_config(explicit: Option<&Path>) -> Result<String> {
    let path = resolve_config_path(explicit)
        .ok_or_else(|| Error::config("no config directory on this platform; pass --config"))?;

    if init_config(&path)? {
        Ok(format!("wrote default config to {}", path.display()))
    } else {
        Ok(format!("config already exists at {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn options_with_config(config: &Path) -> LaunchOptions {
        LaunchOptions {
            config: Some(config.to_path_buf()),
            ..Default::default()
        }
    }

    #[test]
    fn test_flags_override_config() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("config.toml");
        std::fs::write(
            &config,
            "[generator]\ndefault_count = 25\nseed = 1\n[export]\ndirectory = \"/from/config\"\n",
        )
        .unwrap();

        let mut options = options_with_config(&config);
        assert_eq!(options.settings().generator.default_count, 25);

        options.count = Some(7);
        options.seed = Some(99);
        options.export_dir = Some(PathBuf::from("/from/flag"));
        let settings = options.settings();
        assert_eq!(settings.generator.default_count, 7);
        assert_eq!(settings.generator.seed, Some(99));
        assert_eq!(settings.export.directory, Some(PathBuf::from("/from/flag")));
    }

    #[test]
    fn test_country_flag_selects_by_name_or_code() {
        let temp = tempdir().unwrap();
        let mut options = options_with_config(&temp.path().join("missing.toml"));

        options.country = Some("japan".to_string());
        assert_eq!(options.build_state().unwrap().selected_country_id, "jp");

        options.country = Some("+44".to_string());
        assert_eq!(options.build_state().unwrap().selected_country_id, "gb");
    }

    #[test]
    fn test_unknown_country_flag_is_error() {
        let temp = tempdir().unwrap();
        let mut options = options_with_config(&temp.path().join("missing.toml"));
        options.country = Some("atlantis".to_string());

        assert!(matches!(
            options.build_state(),
            Err(Error::UnknownCountry { .. })
        ));
    }

    #[test]
    fn test_count_flag_sets_initial_input() {
        let temp = tempdir().unwrap();
        let mut options = options_with_config(&temp.path().join("missing.toml"));
        options.count = Some(250);

        assert_eq!(options.build_state().unwrap().count_input, "250");
    }

    #[test]
    fn test_write_default_config_once() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("dialgen").join("config.toml");

        let first = write_default_config(Some(&path)).unwrap();
        assert!(first.starts_with("wrote default config"));
        let second = write_default_config(Some(&path)).unwrap();
        assert!(second.starts_with("config already exists"));
    }
}
