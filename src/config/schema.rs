use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
///
/// Every field is optional; an empty or missing file gives the defaults.
///
/// Example YAML:
/// ```yaml
/// catalog: ~/.config/dementia-risk/catalog.yaml
/// strict_catalog: true
/// theme: dark
/// tick_rate_ms: 250
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Custom catalog file replacing the built-in factor tables
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Reject catalogs whose risk weights drop below 1.0 or whose
    /// prevention effects rise above 1.0
    #[serde(default)]
    pub strict_catalog: bool,

    #[serde(default)]
    pub theme: ThemeMode,

    /// TUI tick interval, drives flash message expiry
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            strict_catalog: false,
            theme: ThemeMode::default(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Auto,
    Dark,
    Light,
}
