//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/mazegrid/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::editor::{is_valid_size, nearest_valid_size, DEFAULT_SIZE};
use crate::export::{is_valid_variable_name, DEFAULT_VARIABLE_NAME};
use crate::locale::DEFAULT_LOCALE;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Selected theme id (e.g., "default-dark", "default-light")
    #[serde(default = "default_theme")]
    pub theme: String,
    /// UI language code (e.g., "en", "de")
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Grid size on startup
    #[serde(default = "default_size")]
    pub default_size: usize,
    /// Start in maze mode
    #[serde(default)]
    pub maze_mode: bool,
    /// Directory `maze.py` is written to (defaults to the download dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
    /// Python variable name used by the export
    #[serde(default = "default_variable_name")]
    pub variable_name: String,
    /// TTF/OTF font used for labels (system fonts are tried otherwise)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
}

fn default_theme() -> String {
    "default-dark".to_string()
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_size() -> usize {
    DEFAULT_SIZE
}

fn default_variable_name() -> String {
    DEFAULT_VARIABLE_NAME.to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            locale: default_locale(),
            default_size: default_size(),
            maze_mode: false,
            export_dir: None,
            variable_name: default_variable_name(),
            font_path: None,
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse and sanitize a YAML config
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| e.to_string())?;
        Ok(config.sanitized())
    }

    /// Replace values the editor cannot use
    ///
    /// Sizes outside the size control's range are moved to the nearest
    /// valid size; invalid variable names fall back to `game_map`.
    pub fn sanitized(mut self) -> Self {
        if !is_valid_size(self.default_size) {
            let fixed = nearest_valid_size(self.default_size);
            tracing::warn!(
                "Configured size {} is not an odd value in 5..=25, using {}",
                self.default_size,
                fixed
            );
            self.default_size = fixed;
        }
        if !is_valid_variable_name(&self.variable_name) {
            tracing::warn!(
                "Configured variable name '{}' is not a Python identifier, using '{}'",
                self.variable_name,
                DEFAULT_VARIABLE_NAME
            );
            self.variable_name = default_variable_name();
        }
        self
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Directory exports are written to
    pub fn resolved_export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(crate::export::default_export_dir)
    }
}
