//! The code block state triple and its serialized shape

use serde::{Deserialize, Serialize};

use crate::config::WidgetConfig;

/// Built-in language used when neither saved data nor config names one
pub const DEFAULT_LANGUAGE: &str = "javascript";
/// Built-in theme used when neither saved data nor config names one
pub const DEFAULT_THEME: &str = "vitesse-dark";

/// {code, language, theme}: the single source of truth for what should be
/// rendered.
///
/// Values are immutable snapshots. Transitions build a new value with the
/// `with_*` methods instead of mutating fields in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlockState {
    code: String,
    language: String,
    theme: String,
}

impl CodeBlockState {
    pub fn new(
        code: impl Into<String>,
        language: impl Into<String>,
        theme: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            language: language.into(),
            theme: theme.into(),
        }
    }

    /// Seed from optional saved data, falling back to config then built-ins
    pub fn seed(saved: Option<&SavedData>, config: &WidgetConfig) -> Self {
        let saved = saved.cloned().unwrap_or_default();
        Self {
            code: saved.code.unwrap_or_default(),
            language: saved
                .lang
                .unwrap_or_else(|| config.default_language.clone()),
            theme: saved.theme.unwrap_or_else(|| config.default_theme.clone()),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn with_code(&self, code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..self.clone()
        }
    }

    pub fn with_language(&self, language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..self.clone()
        }
    }

    pub fn with_theme(&self, theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            ..self.clone()
        }
    }

    /// Serialized block shape
    pub fn to_data(&self) -> BlockData {
        BlockData {
            code: self.code.clone(),
            lang: self.language.clone(),
            theme: self.theme.clone(),
        }
    }
}

impl Default for CodeBlockState {
    fn default() -> Self {
        Self::new("", DEFAULT_LANGUAGE, DEFAULT_THEME)
    }
}

impl From<BlockData> for CodeBlockState {
    fn from(data: BlockData) -> Self {
        Self::new(data.code, data.lang, data.theme)
    }
}

/// Persisted block: `{code, lang, theme}` with stable field names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockData {
    pub code: String,
    pub lang: String,
    pub theme: String,
}

impl BlockData {
    pub fn new(code: &str, lang: &str, theme: &str) -> Self {
        Self {
            code: code.to_string(),
            lang: lang.to_string(),
            theme: theme.to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Failed to serialize block: {}", e))
    }
}

/// Saved data as handed over by the host; any field may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SavedData {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
}

impl SavedData {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid block data: {}", e))
    }
}

impl From<BlockData> for SavedData {
    fn from(data: BlockData) -> Self {
        Self {
            code: Some(data.code),
            lang: Some(data.lang),
            theme: Some(data.theme),
        }
    }
}
