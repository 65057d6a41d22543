//! Replay Games library - tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Session**: one game plus viewing preferences
//! - **View**: presentation model derived from a session on demand
//! - **TUI**: terminal front end (ratatui)
//! - **Web**: browser front end (axum)
//! - **Config**: optional TOML file with defaults for every field
//!
//! # Example
//!
//! ```
//! use replay_games::{GameView, MoveOrder, Session};
//! use replay_tictactoe::Position;
//!
//! let mut session = Session::new(MoveOrder::Ascending);
//! session.activate_cell(Position::Center);
//! let view = GameView::from_session(&session);
//! assert_eq!(view.status(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod session;
mod view;

pub mod cli;
pub mod logging;
pub mod tui;
pub mod web;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, HttpConfig, LogConfig, UiConfig};

// Crate-level exports - Errors
pub use error::{AppError, AppErrorKind};

// Crate-level exports - Session and presentation
pub use session::{MoveOrder, Session};
pub use view::{CellView, GameView, MoveEntry};
