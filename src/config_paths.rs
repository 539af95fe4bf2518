//! Centralized configuration paths for codeblock
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/codeblock/`
//! - Windows: `%APPDATA%\codeblock\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "codeblock";

/// Base config directory
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/codeblock`
///   - Else: `~/.config/codeblock`
///
/// Windows:
///   - `%APPDATA%\codeblock`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/codeblock/themes/`
pub fn themes_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("themes"))
}

/// User theme file for `id` inside `themes_dir`, if present
///
/// Both `.yaml` and `.yml` are accepted; `.yaml` wins when both exist.
pub fn user_theme_file(themes_dir: &Path, id: &str) -> Option<PathBuf> {
    ["yaml", "yml"]
        .iter()
        .map(|ext| themes_dir.join(format!("{}.{}", id, ext)))
        .find(|path| path.is_file())
}

/// `~/.config/codeblock/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/codeblock/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the log directory and return it
///
/// `override_dir` (the `--log-dir` flag) replaces the default location.
pub fn ensure_logs_dir(override_dir: Option<&Path>) -> Result<PathBuf, String> {
    let logs = match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => logs_dir().ok_or_else(|| "No config directory available".to_string())?,
    };
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create log directory {}: {}", logs.display(), e))?;
    Ok(logs)
}
