//! Configuration management
//!
//! Handles loading user settings that tune the spell checker and ghost text.

pub mod settings;

pub use settings::{Settings, config_dir, load_settings, load_settings_from};
