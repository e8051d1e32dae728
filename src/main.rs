//! ninecell - terminal tic-tac-toe with a persisted leaderboard.

#![warn(missing_docs)]

use std::sync::Mutex;

use anyhow::Result;
use clap::Parser;
use ninecell::{Cli, Command, LeaderboardStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { db_path } => run_play(&db_path),
        Command::Leaderboard { db_path } => run_leaderboard(&db_path),
    }
}

/// Play a game in the terminal.
///
/// Logs go to a file so the alternate screen stays clean.
fn run_play(db_path: &str) -> Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("ninecell.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    info!(db_path = %db_path, "Starting ninecell");

    let store = LeaderboardStore::open(db_path)?;
    ninecell::run_tui(store)
}

/// Print the standings without starting a game.
fn run_leaderboard(db_path: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut store = LeaderboardStore::open(db_path)?;
    let entries = store.read_all()?;

    if entries.is_empty() {
        println!("No wins recorded yet.");
        return Ok(());
    }
    for entry in entries {
        println!("{}: {} wins", entry.player(), entry.wins());
    }
    Ok(())
}
