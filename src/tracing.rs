//! Logging setup
//!
//! Configure console output via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=codeblock::update=debug` - reducer only (stale discards, versions)
//! - `RUST_LOG=codeblock::syntax=trace` - highlighting engine
//!
//! # Log Files
//!
//! When a log directory is available, logs are also written to
//! `codeblock.log` there with daily rotation, at debug level.

use std::path::Path;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the global subscriber
///
/// `log_dir` overrides the default `~/.config/codeblock/logs/`. File logging
/// is skipped with a warning on stderr if the directory cannot be created.
/// Calling this twice is harmless; the second call is ignored.
pub fn init(log_dir: Option<&Path>) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console goes to stderr so stdout stays clean for rendered output
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir(log_dir) {
        Ok(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "codeblock.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}
