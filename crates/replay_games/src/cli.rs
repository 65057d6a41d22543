//! Command-line interface for replay_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history
#[derive(Parser, Debug)]
#[command(name = "replay_games")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults are used when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Tui,

    /// Serve the game to a web browser
    Http {
        /// Port to bind to (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,
    },
}
