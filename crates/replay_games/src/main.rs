//! Replay Games - Unified CLI
//!
//! Play tic-tac-toe with move history in the terminal or the browser.

use anyhow::Result;
use clap::Parser;
use replay_games::cli::{Cli, Command};
use replay_games::{AppConfig, MoveOrder, Session, logging, tui, web};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Tui => tui::run(&config),
        Command::Http { port, host } => {
            logging::init_stdout();
            let config = config.with_http_overrides(host, port);
            info!(?config, "Starting browser front end");
            let session = Session::new(MoveOrder::from_ascending(*config.ui().ascending()));
            web::serve(config.http(), session).await
        }
    }
}
