//! Highlight themes
//!
//! Provides YAML-based themes with compile-time embedded built-ins and
//! user-defined themes from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/codeblock/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::Deserialize;

// Embed theme YAML files at compile time
pub const VITESSE_DARK_YAML: &str = include_str!("../themes/vitesse-dark.yaml");
pub const VITESSE_LIGHT_YAML: &str = include_str!("../themes/vitesse-light.yaml");
pub const NORD_YAML: &str = include_str!("../themes/nord.yaml");
pub const GITHUB_DARK_YAML: &str = include_str!("../themes/github-dark.yaml");
pub const GITHUB_LIGHT_YAML: &str = include_str!("../themes/github-light.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier stored in block data (e.g. "vitesse-dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "vitesse-dark",
        yaml: VITESSE_DARK_YAML,
    },
    BuiltinTheme {
        id: "vitesse-light",
        yaml: VITESSE_LIGHT_YAML,
    },
    BuiltinTheme {
        id: "nord",
        yaml: NORD_YAML,
    },
    BuiltinTheme {
        id: "github-dark",
        yaml: GITHUB_DARK_YAML,
    },
    BuiltinTheme {
        id: "github-light",
        yaml: GITHUB_LIGHT_YAML,
    },
];

/// Where the theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// User-defined theme in ~/.config/codeblock/themes/
    User,
    /// Built-in theme embedded in binary
    Builtin,
}

impl ThemeSource {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeSource::User => "user",
            ThemeSource::Builtin => "builtin",
        }
    }
}

impl std::fmt::Display for ThemeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Information about an available theme
#[derive(Debug, Clone)]
pub struct ThemeInfo {
    /// Stable identifier (e.g., "vitesse-dark", "my-custom-theme")
    pub id: String,
    /// Display name from YAML (e.g., "Vitesse Dark")
    pub name: String,
    /// Where this theme is loaded from
    pub source: ThemeSource,
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
///
/// `Ok(None)` means no source knows `id`; `Err` means a source had it but
/// it failed to load.
pub fn load_theme(id: &str, include_user: bool) -> Result<Option<Theme>, String> {
    if include_user {
        let user_path = crate::config_paths::themes_dir()
            .and_then(|dir| crate::config_paths::user_theme_file(&dir, id));
        if let Some(user_path) = user_path {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path).map(Some);
        }
    }

    if !BUILTIN_THEMES.iter().any(|t| t.id == id) {
        return Ok(None);
    }
    tracing::debug!("Loading builtin theme: {}", id);
    Theme::from_builtin(id).map(Some)
}

/// List all available themes from all sources
///
/// User themes override builtins with the same id.
pub fn list_available_themes(include_user: bool) -> Vec<ThemeInfo> {
    let mut themes = Vec::new();
    let mut seen_ids = HashSet::new();

    if let Some(user_dir) = include_user.then(crate::config_paths::themes_dir).flatten() {
        if let Ok(entries) = std::fs::read_dir(&user_dir) {
            for entry in entries.filter_map(|e| e.ok()) {
                let path = entry.path();
                if !path
                    .extension()
                    .is_some_and(|ext| ext == "yaml" || ext == "yml")
                {
                    continue;
                }
                let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                if seen_ids.insert(id.to_string()) {
                    let name = from_file(&path)
                        .map(|t| t.name)
                        .unwrap_or_else(|_| id.to_string());
                    themes.push(ThemeInfo {
                        id: id.to_string(),
                        name,
                        source: ThemeSource::User,
                    });
                }
            }
        }
    }

    for builtin in BUILTIN_THEMES {
        if seen_ids.insert(builtin.id.to_string()) {
            let name = Theme::from_yaml(builtin.yaml)
                .map(|t| t.name)
                .unwrap_or_else(|_| builtin.id.to_string());
            themes.push(ThemeInfo {
                id: builtin.id.to_string(),
                name,
                source: ThemeSource::Builtin,
            });
        }
    }

    themes
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|c| u8::from_str_radix(c, 16).map_err(|e| e.to_string()))
        };
        match hex.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// CSS hex notation; alpha is only written when not opaque
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Light or dark base
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

/// Font style for a token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Bold,
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub kind: ThemeKind,
    pub background: String,
    pub foreground: String,
    /// Capture name → style
    #[serde(default)]
    pub tokens: BTreeMap<String, TokenStyleData>,
}

/// A token style is either a bare color or a color with a font style
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TokenStyleData {
    Color(String),
    Styled {
        color: String,
        #[serde(default)]
        font_style: FontStyle,
    },
}

/// Resolved style for one capture name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenStyle {
    pub color: Color,
    pub font_style: FontStyle,
}

impl TokenStyle {
    /// Inline CSS declarations for a token span
    pub fn to_css(&self) -> String {
        match self.font_style {
            FontStyle::Normal => format!("color:{}", self.color.to_css()),
            FontStyle::Italic => format!("color:{};font-style:italic", self.color.to_css()),
            FontStyle::Bold => format!("color:{};font-weight:bold", self.color.to_css()),
        }
    }
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub kind: ThemeKind,
    pub background: Color,
    pub foreground: Color,
    tokens: BTreeMap<String, TokenStyle>,
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let mut tokens = BTreeMap::new();
        for (capture, style) in data.tokens {
            let resolved = match style {
                TokenStyleData::Color(color) => TokenStyle {
                    color: Color::from_hex(&color)?,
                    font_style: FontStyle::Normal,
                },
                TokenStyleData::Styled { color, font_style } => TokenStyle {
                    color: Color::from_hex(&color)?,
                    font_style,
                },
            };
            tokens.insert(capture, resolved);
        }

        Ok(Theme {
            name: data.name,
            kind: data.kind,
            background: Color::from_hex(&data.background)?,
            foreground: Color::from_hex(&data.foreground)?,
            tokens,
        })
    }

    /// Style for a capture name, resolved by longest dotted prefix
    ///
    /// `function.method.call` falls back to `function.method`, then `function`.
    pub fn style_for(&self, capture: &str) -> Option<&TokenStyle> {
        let mut name = capture;
        loop {
            if let Some(style) = self.tokens.get(name) {
                return Some(style);
            }
            match name.rfind('.') {
                Some(idx) => name = &name[..idx],
                None => return None,
            }
        }
    }

    /// Inline style of the highlighted root container
    pub fn root_style(&self) -> String {
        format!(
            "background-color:{};color:{}",
            self.background.to_css(),
            self.foreground.to_css()
        )
    }
}
