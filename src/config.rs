//! Button configuration — which tool buttons are active, and how big.
//!
//! Stored as JSON in the platform config directory:
//!   macOS:   ~/Library/Application Support/snipbar/buttons.json
//!   Linux:   ~/.config/snipbar/buttons.json
//!   Windows: %APPDATA%/snipbar/buttons.json
//!
//! Only reading is supported; the settings UI owns writing.

use crate::buttons::{ButtonKind, CaptureButton};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_BUTTON_SIZE: i32 = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    pub button_size: i32,
    pub buttons: Vec<ButtonKind>,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            button_size: DEFAULT_BUTTON_SIZE,
            buttons: ButtonKind::ALL.to_vec(),
        }
    }
}

impl ButtonConfig {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("snipbar")
            .join("buttons.json")
    }

    /// Parses and validates a config. Button order in the input does not
    /// matter; duplicates are dropped.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: ButtonConfig = serde_json::from_str(json)?;
        config.validate()?;
        config.normalize();
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_json(&json)?;
        log::info!(
            "[CONFIG] Loaded {} buttons ({}px) from {}",
            config.buttons.len(),
            config.button_size,
            path.display()
        );
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("[CONFIG] {} not found — using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.button_size <= 0 {
            return Err(ConfigError::InvalidButtonSize(self.button_size));
        }
        Ok(())
    }

    fn normalize(&mut self) {
        self.buttons.sort();
        self.buttons.dedup();
    }

    pub fn is_enabled(&self, kind: ButtonKind) -> bool {
        self.buttons.binary_search(&kind).is_ok()
    }

    pub fn enable(&mut self, kind: ButtonKind) {
        if let Err(at) = self.buttons.binary_search(&kind) {
            self.buttons.insert(at, kind);
        }
    }

    pub fn disable(&mut self, kind: ButtonKind) {
        self.buttons.retain(|k| *k != kind);
    }

    /// Flips `kind` and returns whether it is now enabled.
    pub fn toggle(&mut self, kind: ButtonKind) -> bool {
        if self.is_enabled(kind) {
            self.disable(kind);
            false
        } else {
            self.enable(kind);
            true
        }
    }

    pub fn set_all(&mut self) {
        self.buttons = ButtonKind::ALL.to_vec();
    }

    /// Builds the buttons to hand over to a [`ButtonHandler`].
    ///
    /// [`ButtonHandler`]: crate::buttons::ButtonHandler
    pub fn build_buttons(&self) -> Vec<CaptureButton> {
        self.buttons
            .iter()
            .map(|kind| CaptureButton::new(*kind, self.button_size))
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Button size must be positive, got {0}")]
    InvalidButtonSize(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let config = ButtonConfig::from_json(r#"{"button_size": 32}"#).unwrap();
        assert_eq!(config.button_size, 32);
        assert_eq!(config.buttons.len(), ButtonKind::ALL.len());
    }

    #[test]
    fn buttons_are_sorted_and_deduplicated() {
        let config =
            ButtonConfig::from_json(r#"{"buttons": ["save", "pencil", "save", "arrow"]}"#).unwrap();
        assert_eq!(
            config.buttons,
            vec![ButtonKind::Pencil, ButtonKind::Arrow, ButtonKind::Save]
        );
    }

    #[test]
    fn zero_size_is_rejected() {
        let result = ButtonConfig::from_json(r#"{"button_size": 0}"#);
        assert!(matches!(result, Err(ConfigError::InvalidButtonSize(0))));
    }

    #[test]
    fn unknown_button_is_a_parse_error() {
        let result = ButtonConfig::from_json(r#"{"buttons": ["laser"]}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn toggling_keeps_order() {
        let mut config = ButtonConfig {
            buttons: vec![ButtonKind::Pencil, ButtonKind::Exit],
            ..Default::default()
        };
        assert!(config.toggle(ButtonKind::Copy));
        assert_eq!(
            config.buttons,
            vec![ButtonKind::Pencil, ButtonKind::Copy, ButtonKind::Exit]
        );
        assert!(!config.toggle(ButtonKind::Pencil));
        assert!(!config.is_enabled(ButtonKind::Pencil));
        config.set_all();
        assert_eq!(config, ButtonConfig::default());
    }

    #[test]
    fn built_buttons_follow_config() {
        let config = ButtonConfig {
            button_size: 30,
            buttons: vec![ButtonKind::Undo, ButtonKind::Exit],
        };
        let buttons = config.build_buttons();
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].kind(), ButtonKind::Undo);
        assert!(buttons.iter().all(|b| crate::buttons::PlaceableItem::base_size(b) == 30));
    }

    #[test]
    fn default_path_ends_with_file_name() {
        let path = ButtonConfig::default_path();
        assert!(path.ends_with("snipbar/buttons.json"));
    }
}
