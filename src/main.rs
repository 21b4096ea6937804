//! Timeline Tic-Tac-Toe - CLI entry point

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use std::sync::Arc;
use timeline_tictactoe::{replay_cells, transcript, tui, Settings};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    if let Some(log_file) = cli.log_file {
        settings = settings.with_log_file(log_file);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&settings),
        Command::Replay { cells } => run_replay(&settings, &cells),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Run the interactive TUI, logging to a file so the screen stays clean.
fn run_play(settings: &Settings) -> Result<()> {
    init_file_logging(settings.log_file())?;
    tui::run_tui(settings)
}

fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Replay cells and print the board, status and move list.
fn run_replay(settings: &Settings, cells: &[usize]) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();

    info!(moves = cells.len(), "Replaying moves");
    let (game, _skipped) = replay_cells(cells);
    print!("{}", transcript(&game, settings));
    Ok(())
}
