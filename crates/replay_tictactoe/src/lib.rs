//! Pure tic-tac-toe rules and time-travel move history.
//!
//! # Architecture
//!
//! - **Rules**: pure functions judging a single board snapshot
//!   ([`evaluate`], [`can_activate`]).
//! - **GameState**: the recorded snapshots and the move being viewed; the
//!   board, player to move and status are derived from it on read.
//! - **Invariants**: properties of the history checked after every move in
//!   debug builds.
//!
//! # Example
//!
//! ```
//! use replay_tictactoe::{GameState, Position};
//!
//! let mut game = GameState::new();
//! game.activate_cell(Position::Center);
//! game.activate_cell(Position::TopLeft);
//! game.jump_to(1).unwrap();
//! assert_eq!(game.status().to_string(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod history;
mod invariants;
mod position;
pub mod rules;
mod status;
mod types;

pub use action::{Activation, HistoryError};
pub use game::GameState;
pub use history::MoveRecord;
pub use invariants::{
    CursorInBoundsInvariant, HistoryInvariants, Invariant, InvariantSet, InvariantViolation,
    RootedHistoryInvariant, SingleCellDeltaInvariant,
};
pub use position::Position;
pub use rules::{Evaluation, LINES, WinningLine, can_activate, check_winner, evaluate};
pub use status::GameStatus;
pub use types::{Board, Player, Square};
