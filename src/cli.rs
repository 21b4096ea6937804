//! Command-line interface for timeline_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Timeline Tic-Tac-Toe - play in the terminal and travel back through moves
#[derive(Parser, Debug)]
#[command(name = "timeline_tictactoe")]
#[command(about = "Terminal tic-tac-toe with move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log file (overrides the settings file)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Replay a sequence of cells and print the result
    Replay {
        /// Cells to play in order, numbered 1-9 row by row
        #[arg(required = true)]
        cells: Vec<usize>,
    },
}
