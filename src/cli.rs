//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use rewind_tictactoe::Action;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./rewind.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Apply a list of actions and print the resulting game
    Play {
        /// Actions in order: a cell 0-8, 'jump:<step>', or 'toggle'
        #[arg(required = true)]
        actions: Vec<Action>,

        /// Print the game as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
