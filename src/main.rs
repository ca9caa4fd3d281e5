//! Rewind - tic-tac-toe with time travel
//!
//! Interactive terminal play or scripted replay of a game.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rewind::{Action, AppConfig, GameView, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Tui => {
            init_file_logging(&config)?;
            run_tui(&config)
        }
        Command::Play { actions, json } => {
            init_stderr_logging(&config);
            run_play(&config, &actions, json)
        }
    }
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to a file so output does not corrupt the terminal UI.
fn init_file_logging(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_stderr_logging(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .init();
}

/// Applies the actions to a fresh game and prints the result.
#[instrument(skip(config, actions), fields(count = actions.len()))]
fn run_play(config: &AppConfig, actions: &[Action], json: bool) -> Result<()> {
    let view: GameView = rewind::play(actions, *config.sort_descending())?;
    info!(status = %view.status, step = view.step, "Replay finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", view.render_text());
    }
    Ok(())
}
