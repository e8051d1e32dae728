//! Command-line interface.

use clap::{Parser, Subcommand};

/// Terminal tic-tac-toe with a persisted win-count leaderboard.
#[derive(Parser, Debug)]
#[command(name = "ninecell")]
#[command(about = "Terminal tic-tac-toe with a persisted leaderboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal.
    Play {
        /// Path to the database file (created if it doesn't exist).
        #[arg(long, default_value = "ninecell.db")]
        db_path: String,
    },

    /// Print the leaderboard standings and exit.
    Leaderboard {
        /// Path to the database file (created if it doesn't exist).
        #[arg(long, default_value = "ninecell.db")]
        db_path: String,
    },
}
