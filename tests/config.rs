//! Configuration file and path tests

use codeblock::config::WidgetConfig;
use codeblock::config_paths;

#[test]
fn test_config_dir_is_app_specific() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.ends_with("codeblock"), "got {}", dir.display());
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("yaml"));
    }
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = WidgetConfig {
        placeholder: "Type here".to_string(),
        default_language: "rust".to_string(),
        default_theme: "nord".to_string(),
        overlay_class: "hl".to_string(),
    };
    config.save(&path).unwrap();

    assert_eq!(WidgetConfig::load(&path), config);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(
        WidgetConfig::load(&dir.path().join("absent.yaml")),
        WidgetConfig::default()
    );
}

#[test]
fn test_broken_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "placeholder: [oops").unwrap();
    assert_eq!(WidgetConfig::load(&path), WidgetConfig::default());
}

#[test]
fn test_configured_defaults_seed_new_blocks() {
    let config = WidgetConfig {
        default_language: "python".to_string(),
        default_theme: "github-light".to_string(),
        ..WidgetConfig::default()
    };
    let model = codeblock::WidgetModel::new(None, config, false);
    assert_eq!(model.data(), codeblock::BlockData::new("", "python", "github-light"));
}

#[test]
fn test_log_dir_override_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let logs = dir.path().join("a").join("logs");

    let resolved = config_paths::ensure_logs_dir(Some(&logs)).unwrap();
    assert_eq!(resolved, logs);
    assert!(logs.is_dir());

    // Existing directory is fine
    assert_eq!(config_paths::ensure_logs_dir(Some(&logs)).unwrap(), logs);
}

#[test]
fn test_log_dir_override_under_a_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("not-a-dir");
    std::fs::write(&file, "x").unwrap();

    let err = config_paths::ensure_logs_dir(Some(&file.join("logs"))).unwrap_err();
    assert!(err.contains("not-a-dir"), "got {}", err);
}

#[test]
fn test_user_theme_file_prefers_yaml() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(config_paths::user_theme_file(dir.path(), "mine"), None);

    std::fs::write(dir.path().join("mine.yml"), "").unwrap();
    assert_eq!(
        config_paths::user_theme_file(dir.path(), "mine"),
        Some(dir.path().join("mine.yml"))
    );

    std::fs::write(dir.path().join("mine.yaml"), "").unwrap();
    assert_eq!(
        config_paths::user_theme_file(dir.path(), "mine"),
        Some(dir.path().join("mine.yaml"))
    );
}
