//! Wordle TUI - CLI
//!
//! Terminal Wordle with a full-screen TUI and a line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;
use wordle_tui::{
    commands::run_simple,
    config::GameConfig,
    interactive::{App, run_tui},
};

#[derive(Parser)]
#[command(
    name = "wordle_tui",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    config: GameConfig,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log debug detail
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based mode without the TUI
    Simple,
}

/// Stderr shares the player's terminal, so it only carries warnings by default
fn log_level(verbose: bool, to_file: bool) -> Level {
    match (verbose, to_file) {
        (true, _) => Level::DEBUG,
        (false, true) => Level::INFO,
        (false, false) => Level::WARN,
    }
}

/// Install the log subscriber
///
/// The TUI owns the terminal, so without a log file it runs with no
/// subscriber at all; simple mode logs to stderr.
fn init_logging(log_file: Option<&Path>, verbose: bool, command: Commands) -> Result<()> {
    let level = log_level(verbose, log_file.is_some());

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if command == Commands::Simple {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_deref(), cli.verbose, command)?;

    let dictionary = cli.config.dictionary().context("loading word lists")?;
    let store = cli.config.store();

    match command {
        Commands::Play => {
            let app = App::new(dictionary, store, cli.config.toast_duration());
            run_tui(app)
        }
        Commands::Simple => run_simple(&dictionary, store.as_ref()).map_err(Into::into),
    }
}
