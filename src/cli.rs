//! Command-line argument parsing for the `codeblock` binary
//!
//! Supports:
//! - Highlighting a file, or stdin when no path (or `-`) is given
//! - Loading a saved block (`{code, lang, theme}` JSON) with `--block`
//! - Overriding language/theme and the config file
//! - Listing the built-in catalog

use std::path::PathBuf;

use clap::Parser;

use crate::model::SavedData;

/// Render a code block to HTML
#[derive(Parser, Debug)]
#[command(
    name = "codeblock",
    version,
    about = "Render an editable, syntax-highlighted code block as HTML"
)]
pub struct CliArgs {
    /// Source file to highlight (stdin when omitted or "-")
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Treat the input as saved block JSON instead of raw code
    #[arg(short = 'b', long)]
    pub block: bool,

    /// Language identifier (e.g. rust, py, javascript)
    #[arg(short = 'l', long, value_name = "ID")]
    pub language: Option<String>,

    /// Theme identifier (e.g. vitesse-dark, nord)
    #[arg(short = 't', long, value_name = "ID")]
    pub theme: Option<String>,

    /// Config file (defaults to ~/.config/codeblock/config.yaml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory for log files (defaults to ~/.config/codeblock/logs)
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Print only the highlighted overlay markup
    #[arg(long)]
    pub overlay_only: bool,

    /// List supported languages and exit
    #[arg(long)]
    pub list_languages: bool,

    /// List available themes and exit
    #[arg(long)]
    pub list_themes: bool,

    /// Seconds to wait for the render to finish
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub timeout: u64,
}

/// Where the code comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl CliArgs {
    pub fn input_source(&self) -> InputSource {
        match &self.path {
            Some(path) if path.as_os_str() != "-" => InputSource::File(path.clone()),
            _ => InputSource::Stdin,
        }
    }

    /// Build the initial block from the raw input and the flags
    ///
    /// Flags win over values stored in a `--block` document.
    pub fn saved_data(&self, input: &str) -> Result<SavedData, String> {
        let mut saved = if self.block {
            SavedData::from_json(input)?
        } else {
            SavedData {
                code: Some(input.to_string()),
                ..SavedData::default()
            }
        };

        if let Some(language) = &self.language {
            saved.lang = Some(language.clone());
        }
        if let Some(theme) = &self.theme {
            saved.theme = Some(theme.clone());
        }
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("codeblock").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_path_reads_stdin() {
        assert_eq!(parse(&[]).input_source(), InputSource::Stdin);
        assert_eq!(parse(&["-"]).input_source(), InputSource::Stdin);
        assert_eq!(
            parse(&["main.rs"]).input_source(),
            InputSource::File(PathBuf::from("main.rs"))
        );
    }

    #[test]
    fn test_raw_input_with_overrides() {
        let args = parse(&["-l", "rust", "--theme", "nord"]);
        let saved = args.saved_data("fn main() {}").unwrap();
        assert_eq!(saved.code.as_deref(), Some("fn main() {}"));
        assert_eq!(saved.lang.as_deref(), Some("rust"));
        assert_eq!(saved.theme.as_deref(), Some("nord"));
    }

    #[test]
    fn test_block_input_keeps_saved_fields() {
        let args = parse(&["--block", "--theme", "github-light"]);
        let saved = args
            .saved_data(r#"{"code":"x = 1","lang":"python","theme":"nord"}"#)
            .unwrap();
        assert_eq!(saved.code.as_deref(), Some("x = 1"));
        assert_eq!(saved.lang.as_deref(), Some("python"));
        assert_eq!(saved.theme.as_deref(), Some("github-light"));
    }

    #[test]
    fn test_invalid_block_is_an_error() {
        let args = parse(&["--block"]);
        assert!(args.saved_data("not json").is_err());
    }
}
