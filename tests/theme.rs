//! Theme loading and capture resolution

use codeblock::theme::{
    list_available_themes, Color, FontStyle, Theme, ThemeKind, ThemeSource, BUILTIN_THEMES,
    NORD_YAML,
};

#[test]
fn test_builtin_ids_are_unique_and_named() {
    let mut ids: Vec<&str> = BUILTIN_THEMES.iter().map(|t| t.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), BUILTIN_THEMES.len());

    for builtin in BUILTIN_THEMES {
        let theme = Theme::from_builtin(builtin.id).unwrap();
        assert!(!theme.name.is_empty());
    }
}

#[test]
fn test_light_and_dark_kinds() {
    assert_eq!(Theme::from_builtin("github-light").unwrap().kind, ThemeKind::Light);
    assert_eq!(Theme::from_builtin("vitesse-dark").unwrap().kind, ThemeKind::Dark);
}

#[test]
fn test_nord_root_style() {
    let theme = Theme::from_yaml(NORD_YAML).unwrap();
    assert!(theme.root_style().starts_with("background-color:#"));
    assert!(theme.root_style().contains(";color:#"));
}

#[test]
fn test_styled_token_entries() {
    let yaml = r##"
version: 1
name: Test
background: "#000000"
foreground: "#ffffff"
tokens:
  comment: { color: "#808080", font_style: italic }
  keyword: "#ff0000"
  keyword.control: { color: "#00ff00", font_style: bold }
"##;
    let theme = Theme::from_yaml(yaml).unwrap();

    let comment = theme.style_for("comment.line").unwrap();
    assert_eq!(comment.font_style, FontStyle::Italic);
    assert_eq!(comment.to_css(), "color:#808080;font-style:italic");

    assert_eq!(theme.style_for("keyword.operator").unwrap().color, Color::rgb(255, 0, 0));
    assert_eq!(
        theme.style_for("keyword.control.return").unwrap().to_css(),
        "color:#00ff00;font-weight:bold"
    );
    assert!(theme.style_for("string").is_none());
}

#[test]
fn test_invalid_color_is_an_error() {
    let yaml = "version: 1\nname: Bad\nbackground: \"#zzzzzz\"\nforeground: \"#ffffff\"\n";
    assert!(Theme::from_yaml(yaml).is_err());
}

#[test]
fn test_builtin_listing_reports_source() {
    let themes = list_available_themes(false);
    assert_eq!(themes.len(), BUILTIN_THEMES.len());
    assert!(themes.iter().all(|t| t.source == ThemeSource::Builtin));

    let nord = themes.iter().find(|t| t.id == "nord").unwrap();
    assert_eq!(nord.name, "Nord");
    assert_eq!(nord.source.to_string(), "builtin");
    assert_eq!(ThemeSource::User.to_string(), "user");
}
