//! Widget configuration
//!
//! Stored as YAML, by default in `~/.config/codeblock/config.yaml`.
//! Every field has a default so partial files are fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{DEFAULT_LANGUAGE, DEFAULT_THEME};

/// Construction-time configuration for a code block widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Placeholder shown by an empty editable surface
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Language for blocks without a saved one
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Theme for blocks without a saved one
    #[serde(default = "default_theme")]
    pub default_theme: String,

    /// CSS class the overlay root gets so it stacks with the surface
    #[serde(default = "default_overlay_class")]
    pub overlay_class: String,
}

fn default_placeholder() -> String {
    "Enter your code".to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

fn default_overlay_class() -> String {
    "codeblock-overlay".to_string()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            default_language: default_language(),
            default_theme: default_theme(),
            overlay_class: default_overlay_class(),
        }
    }
}

impl WidgetConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))
    }

    /// Load config from `path`, or return defaults if missing or invalid
    pub fn load(path: &Path) -> Self {
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

    /// Load from the user config directory
    pub fn load_user() -> Self {
        match crate::config_paths::config_file() {
            Some(path) => Self::load(&path),
            None => {
                tracing::debug!("No config directory available, using defaults");
                Self::default()
            }
        }
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<(), String> {
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
}
