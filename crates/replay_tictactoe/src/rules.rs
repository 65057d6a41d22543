//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot
//! according to tic-tac-toe rules. Rules are separated from board
//! storage and history so every snapshot can be judged on its own.

pub mod draw;
pub mod evaluate;
pub mod win;

pub use draw::{is_draw, is_full};
pub use evaluate::{Evaluation, can_activate, evaluate};
pub use win::{LINES, WinningLine, check_winner, winning_line};
