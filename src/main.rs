//! Tally - Interactive terminal counter widget
//!
//! A counter readout with a configurable step field, add/subtract
//! buttons, and threshold coloring at ±100, rendered with ratatui.

mod config;
mod core;
mod data;
mod frontend;
mod theme;
mod ui;

use anyhow::Result;
use clap::{Parser as ClapParser, Subcommand};
use frontend::{Frontend, FrontendEvent, TuiFrontend};
use ratatui::layout::Rect;
use std::path::PathBuf;
use std::time::Duration;

#[derive(ClapParser)]
#[command(name = "tally")]
#[command(about = "Interactive terminal counter widget", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom data directory (default: ~/.tally)
    /// Can also be set via TALLY_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Theme override for this run
    #[arg(short, long)]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in themes
    Themes,
}

fn main() -> Result<()> {
    // Initialize logging to file (use RUST_LOG env var to control level, e.g. RUST_LOG=debug)
    // TUI apps can't log to stdout, so we write to a file
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("tally.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    let cli = Cli::parse();

    if let Some(command) = cli.command {
        match command {
            Commands::Themes => {
                for theme in theme::AppTheme::builtin_themes() {
                    println!("{:<15} {}", theme.name, theme.description);
                }
                return Ok(());
            }
        }
    }

    let mut config = config::Config::load(cli.config, cli.data_dir)?;
    if let Some(theme) = cli.theme {
        config.ui.theme = theme;
    }

    tracing::info!(theme = %config.ui.theme, "Starting tally");
    run_tui(config)
}

/// Synchronous event loop: poll, apply, redraw when dirty.
fn run_tui(config: config::Config) -> Result<()> {
    let poll_timeout = Duration::from_millis(config.ui.poll_ms.max(1));
    let mouse_capture = config.ui.mouse_enabled;

    let mut app = core::AppCore::new(config);
    let mut frontend = TuiFrontend::new(poll_timeout, mouse_capture)?;

    while app.running {
        if app.needs_render {
            frontend.render(&app)?;
            app.needs_render = false;
        }

        for event in frontend.poll_events()? {
            match event {
                FrontendEvent::Key { code, modifiers } => app.handle_key(code, modifiers),
                FrontendEvent::Mouse { kind, x, y, .. } => {
                    let (width, height) = frontend.size();
                    app.handle_mouse(kind, x, y, Rect::new(0, 0, width, height));
                }
                FrontendEvent::Resize { width, height } => app.handle_resize(width, height),
                FrontendEvent::Paste { text } => app.handle_paste(&text),
            }
        }
    }

    frontend.cleanup()?;
    Ok(())
}
