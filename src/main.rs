use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use iocraft::prelude::*;

use issue_table::app::App;
use issue_table::color::ColorDepth;
use issue_table::config::builtin_themes;
use issue_table::config::keybindings::MergedBindings;
use issue_table::config::loader;
use issue_table::source::{BuiltinSource, IssueSource, JsonFileSource};
use issue_table::theme::{Background, ResolvedTheme};
use issue_table::types::Issue;

#[derive(Parser)]
#[command(
    name = "issue-table",
    version,
    about = "Issue table with checkbox selection"
)]
struct Cli {
    /// Path to config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Issues JSON file (overrides `defaults.issues_file`).
    #[arg(short, long)]
    issues: Option<PathBuf>,

    /// Enable debug logging to debug.log.
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available built-in themes.
    Themes,
    /// Load the issue list and print a summary without starting the UI.
    Check,
}

/// Pick the issue source: `--issues`, then the config default, then the
/// embedded sample.
fn select_source(cli_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Box<dyn IssueSource> {
    match cli_path.or(config_path) {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(BuiltinSource),
    }
}

fn print_summary(origin: &str, issues: &[Issue]) {
    let open: Vec<&Issue> = issues.iter().filter(|i| i.is_open()).collect();
    let open_value: i128 = open.iter().map(|i| i128::from(i.value)).sum();
    println!("{origin}");
    println!(
        "  {} issues: {} open, {} resolved",
        issues.len(),
        open.len(),
        issues.len() - open.len()
    );
    println!("  open value total: {open_value}");
}

fn main() -> Result<()> {
    // Install a panic hook that writes to a file, since the fullscreen TUI
    // swallows stderr.
    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        let msg = format!("{info}\n\n{backtrace}");
        let _ = std::fs::write("panic.log", &msg);
        eprintln!("{msg}");
    }));

    let cli = Cli::parse();

    if let Some(Commands::Themes) = cli.command {
        for name in builtin_themes::list() {
            println!("{name}");
        }
        return Ok(());
    }

    // Set up tracing.
    if cli.debug {
        let file = std::fs::File::create("debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(file)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    // Load config.
    let config = loader::load_config(cli.config.as_deref())?;

    // The issue list is read once and stays immutable for the session.
    let source = select_source(cli.issues, config.defaults.issues_file.clone());
    let issues = source
        .load()
        .with_context(|| format!("loading issues from {}", source.describe()))?;

    if let Some(Commands::Check) = cli.command {
        print_summary(&source.describe(), &issues);
        return Ok(());
    }

    // Detect terminal capabilities.
    let color_depth = ColorDepth::detect();
    let background = Background::detect();
    let theme = ResolvedTheme::resolve(&config.theme, background);
    let keybindings = MergedBindings::from_config(&config.keybindings);

    tracing::info!(count = issues.len(), ?color_depth, ?background, "issue-table starting");

    // Enter fullscreen TUI (iocraft uses smol internally).
    smol::block_on(
        element! {
            App(
                config: &config,
                issues: issues.as_slice(),
                theme: &theme,
                keybindings: &keybindings,
                color_depth,
            )
        }
        .fullscreen(),
    )?;

    Ok(())
}
