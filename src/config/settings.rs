//! User settings and preferences
//!
//! Manages application settings stored in ~/.sqlassist/config.toml

use crate::completer::DEFAULT_GHOST_CANDIDATES;
use crate::error::{ConfigError, ConfigResult};
use crate::sql::spell::SpellConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_max_edit_distance")]
    pub max_edit_distance: usize,

    #[serde(default = "default_max_length_delta")]
    pub max_length_delta: usize,

    #[serde(default = "default_min_word_length")]
    pub min_word_length: usize,

    /// Project-specific words the spell checker should accept
    #[serde(default)]
    pub extra_words: Vec<String>,

    #[serde(default = "default_ghost_candidates")]
    pub ghost_candidates: usize,
}

fn default_max_edit_distance() -> usize {
    2
}

fn default_max_length_delta() -> usize {
    2
}

fn default_min_word_length() -> usize {
    3
}

fn default_ghost_candidates() -> usize {
    DEFAULT_GHOST_CANDIDATES
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_edit_distance: default_max_edit_distance(),
            max_length_delta: default_max_length_delta(),
            min_word_length: default_min_word_length(),
            extra_words: Vec::new(),
            ghost_candidates: default_ghost_candidates(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML, filling in defaults for missing keys.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that would disable the engine in surprising ways.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.ghost_candidates == 0 {
            return Err(ConfigError::Invalid(
                "ghost_candidates must be at least 1".into(),
            ));
        }
        if self.min_word_length == 0 {
            return Err(ConfigError::Invalid(
                "min_word_length must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Spell checker thresholds derived from these settings.
    pub fn spell_config(&self) -> SpellConfig {
        SpellConfig {
            max_distance: self.max_edit_distance,
            max_length_delta: self.max_length_delta,
            min_word_length: self.min_word_length,
            extra_words: self.extra_words.clone(),
        }
    }
}

/// Get the config directory path (~/.sqlassist/)
pub fn config_dir() -> ConfigResult<PathBuf> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".sqlassist"))
}

/// Load settings from ~/.sqlassist/config.toml
pub fn load_settings() -> ConfigResult<Settings> {
    load_settings_from(&config_dir()?.join("config.toml"))
}

/// Load settings from `path`; a missing file yields the defaults.
pub fn load_settings_from(path: &Path) -> ConfigResult<Settings> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No settings file, using defaults");
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(path)?;
    Settings::from_toml_str(&content)
}
