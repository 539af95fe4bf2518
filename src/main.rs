//! `codeblock` - render a code block through the widget pipeline

use std::io::Read;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;

use codeblock::cli::{CliArgs, InputSource};
use codeblock::highlight::Catalog;
use codeblock::theme::{self, ThemeInfo};
use codeblock::{EditorWidget, TreeSitterEngine, WidgetConfig};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    codeblock::tracing::init(args.log_dir.as_deref());

    if args.list_languages {
        for entry in TreeSitterEngine::new().languages() {
            println!("{}\t{}", entry.id, entry.display_name);
        }
        return Ok(());
    }
    if args.list_themes {
        for info in theme::list_available_themes(true) {
            println!("{}", theme_line(&info));
        }
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => WidgetConfig::load(path),
        None => WidgetConfig::load_user(),
    };

    let input = read_input(&args.input_source())?;
    let saved = args.saved_data(&input).map_err(|e| anyhow!(e))?;

    let mut widget = EditorWidget::with_builtin_engine(Some(saved), config, false);
    widget.render();

    if !widget.wait_idle(Duration::from_secs(args.timeout)) {
        bail!("render did not finish within {}s", args.timeout);
    }

    let view = widget.view();
    if args.overlay_only {
        println!("{}", view.overlay_markup());
    } else {
        println!("{}", view.to_html());
    }

    if let Some(err) = widget.take_errors().into_iter().next() {
        return Err(err).context("highlighting failed, printed unhighlighted code");
    }
    Ok(())
}

fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
        InputSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
    }
}

/// `id<TAB>name<TAB>source`, one per `--list-themes` row
fn theme_line(info: &ThemeInfo) -> String {
    format!("{}\t{}\t{}", info.id, info.name, info.source)
}
