//! Configuration types for dialgen
//!
//! Defines `Settings` (the whole `config.toml`) and its sections.

use std::path::PathBuf;
use std::time::Duration;

use dialgen_core::pagination::{COUNTRY_PAGE_SIZE, RESULT_PAGE_SIZE};
use dialgen_core::CountryPhoneFormat;
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    /// Country identifier selected at startup
    #[serde(default)]
    pub default_country: Option<String>,

    #[serde(default)]
    pub generator: GeneratorSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub export: ExportSettings,

    #[serde(default)]
    pub feedback: FeedbackSettings,

    /// Extra countries appended after the built-in table
    #[serde(default)]
    pub countries: Vec<CountryPhoneFormat>,
}

/// Generator settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratorSettings {
    /// Initial value of the count input
    #[serde(default = "default_count")]
    pub default_count: u32,

    /// Fixed RNG seed; every request replays the same draws when set
    #[serde(default)]
    pub seed: Option<u64>,

    /// Delay before generation starts so the busy state can render
    #[serde(default = "default_yield_ms")]
    pub yield_ms: u64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            default_count: default_count(),
            seed: None,
            yield_ms: default_yield_ms(),
        }
    }
}

fn default_count() -> u32 {
    10
}

fn default_yield_ms() -> u64 {
    100
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Numbers per result page
    #[serde(default = "default_results_page_size")]
    pub results_page_size: usize,

    /// Countries per picker page
    #[serde(default = "default_countries_page_size")]
    pub countries_page_size: usize,

    /// How long the per-row "copied" marker stays visible
    #[serde(default = "default_copied_flash_ms")]
    pub copied_flash_ms: u64,

    /// How long the copy-all confirmation stays visible
    #[serde(default = "default_copied_all_flash_ms")]
    pub copied_all_flash_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            results_page_size: default_results_page_size(),
            countries_page_size: default_countries_page_size(),
            copied_flash_ms: default_copied_flash_ms(),
            copied_all_flash_ms: default_copied_all_flash_ms(),
        }
    }
}

impl UiSettings {
    pub fn copied_flash(&self) -> Duration {
        Duration::from_millis(self.copied_flash_ms)
    }

    pub fn copied_all_flash(&self) -> Duration {
        Duration::from_millis(self.copied_all_flash_ms)
    }
}

fn default_results_page_size() -> usize {
    RESULT_PAGE_SIZE
}

fn default_countries_page_size() -> usize {
    COUNTRY_PAGE_SIZE
}

fn default_copied_flash_ms() -> u64 {
    1500
}

fn default_copied_all_flash_ms() -> u64 {
    2000
}

/// Export settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExportSettings {
    /// Target directory; the current directory when unset
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl ExportSettings {
    pub fn directory_or_cwd(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Feedback settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FeedbackSettings {
    /// Ring the terminal bell as haptic feedback
    #[serde(default)]
    pub haptics: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.default_country, None);
        assert_eq!(settings.generator.default_count, 10);
        assert_eq!(settings.generator.yield_ms, 100);
        assert_eq!(settings.ui.results_page_size, 50);
        assert_eq!(settings.ui.countries_page_size, 30);
        assert_eq!(settings.ui.copied_flash(), Duration::from_millis(1500));
        assert_eq!(settings.ui.copied_all_flash(), Duration::from_millis(2000));
        assert!(!settings.feedback.haptics);
        assert!(settings.countries.is_empty());
    }

    #[test]
    fn test_partial_sections() {
        let settings: Settings = toml::from_str(
            r#"
default_country = "jp"

[generator]
seed = 42

[ui]
results_page_size = 20

[export]
directory = "/tmp/numbers"
"#,
        )
        .unwrap();

        assert_eq!(settings.default_country.as_deref(), Some("jp"));
        assert_eq!(settings.generator.seed, Some(42));
        assert_eq!(settings.generator.default_count, 10);
        assert_eq!(settings.ui.results_page_size, 20);
        assert_eq!(settings.ui.countries_page_size, 30);
        assert_eq!(
            settings.export.directory_or_cwd(),
            PathBuf::from("/tmp/numbers")
        );
    }

    #[test]
    fn test_custom_countries() {
        let settings: Settings = toml::from_str(
            r#"
[[countries]]
id = "xx"
name = "Example"
dial_code = "+999"
rule = { length = 8, prefixes = ["5"], groups = [4, 4] }
"#,
        )
        .unwrap();

        assert_eq!(settings.countries.len(), 1);
        let country = &settings.countries[0];
        assert_eq!(country.rule.length, 8);
        assert!(country.flag.is_empty());
    }

    #[test]
    fn test_export_directory_defaults_to_cwd() {
        assert_eq!(
            ExportSettings::default().directory_or_cwd(),
            PathBuf::from(".")
        );
    }
}
