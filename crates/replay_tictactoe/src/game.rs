//! Game state with time-travel move history.

use super::action::{Activation, HistoryError};
use super::history::MoveRecord;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::{self, Evaluation};
use super::status::GameStatus;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A game session: every board snapshot played so far and the one being viewed.
///
/// The viewed move is the single source of truth for what is displayed and
/// whose turn it is. Everything else (board, player, status) is derived from
/// it on read.
///
/// Deserialized states are checked against the history invariants and
/// rejected with [`HistoryError::InvalidHistory`] when any of them fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordedGame")]
pub struct GameState {
    history: Vec<MoveRecord>,
    current_move: usize,
}

/// Unchecked form of [`GameState`] as read from storage.
#[derive(Deserialize)]
struct RecordedGame {
    history: Vec<MoveRecord>,
    current_move: usize,
}

impl TryFrom<RecordedGame> for GameState {
    type Error = HistoryError;

    #[instrument(
        skip_all,
        fields(records = recorded.history.len(), current_move = recorded.current_move)
    )]
    fn try_from(recorded: RecordedGame) -> Result<Self, Self::Error> {
        let game = Self {
            history: recorded.history,
            current_move: recorded.current_move,
        };
        HistoryInvariants::check_all(&game).map_err(|violations| {
            let reason = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            debug!(%reason, "Rejecting recorded game");
            HistoryError::InvalidHistory { reason }
        })?;
        Ok(game)
    }
}

impl GameState {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![MoveRecord::start()],
            current_move: 0,
        }
    }

    /// Places the active player's mark at `pos` on the viewed board.
    ///
    /// Any moves after the viewed one are discarded before the new snapshot
    /// is appended, and the view moves to the new snapshot. If the viewed
    /// board is already won or the square is taken nothing changes and the
    /// reason is returned.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn activate_cell(&mut self, pos: Position) -> Activation {
        let board = self.current_board();
        if !rules::can_activate(board, pos) {
            let rejected = if board.is_empty(pos) {
                Activation::GameDecided
            } else {
                Activation::CellOccupied
            };
            debug!(position = %pos, reason = %rejected, "Ignoring cell activation");
            return rejected;
        }

        let player = self.active_player();
        let next = board.with_mark(pos, player);

        let discarded = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(MoveRecord::new(next, pos));
        self.current_move = self.history.len() - 1;

        debug!(
            position = %pos,
            %player,
            discarded,
            current_move = self.current_move,
            "Mark placed"
        );

        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "History invariants violated"
        );

        Activation::Placed
    }

    /// Views the snapshot after move `move_index` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::MoveOutOfRange`] when `move_index` is not a
    /// recorded move; the view is left unchanged.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), HistoryError> {
        if move_index >= self.history.len() {
            return Err(HistoryError::MoveOutOfRange {
                requested: move_index,
                len: self.history.len(),
            });
        }
        self.current_move = move_index;
        debug!(move_index, "Jumped to move");
        Ok(())
    }

    /// Recorded snapshots, starting with the empty board.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Index of the viewed move.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Board of the viewed move.
    pub fn current_board(&self) -> &Board {
        self.history[self.current_move].board()
    }

    /// Player who moves next from the viewed board.
    pub fn active_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Rules evaluation of the viewed board.
    pub fn evaluation(&self) -> Evaluation {
        rules::evaluate(self.current_board())
    }

    /// Status of the viewed board.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        let evaluation = rules::evaluate(board);
        match evaluation.winning_line {
            Some(line) => match board.get(line.positions()[0]).player() {
                Some(winner) => GameStatus::Winner(winner),
                None => GameStatus::NextPlayer(self.active_player()),
            },
            None if evaluation.is_draw => GameStatus::Draw,
            None => GameStatus::NextPlayer(self.active_player()),
        }
    }

    /// Replays `positions` from a new game, ignoring rejected activations.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Self {
        let mut game = Self::new();
        for pos in positions {
            game.activate_cell(*pos);
        }
        game
    }
}

#[cfg(test)]
impl GameState {
    /// Builds a state from raw parts, bypassing every check.
    pub(crate) fn from_parts(history: Vec<MoveRecord>, current_move: usize) -> Self {
        Self {
            history,
            current_move,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn at(index: usize) -> Position {
        Position::from_index(index).expect("index in range")
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_move(), 0);
        assert_eq!(game.active_player(), Player::X);
        assert_eq!(game.status(), GameStatus::NextPlayer(Player::X));
        assert_eq!(game.history()[0].placed(), None);
    }

    #[test]
    fn test_marks_alternate() {
        let mut game = GameState::new();
        assert!(game.activate_cell(Position::Center).is_placed());
        assert!(game.activate_cell(Position::TopLeft).is_placed());
        assert_eq!(game.current_board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(game.current_board().get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(game.active_player(), Player::X);
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut game = GameState::new();
        game.activate_cell(Position::Center);
        let before = game.clone();
        assert_eq!(game.activate_cell(Position::Center), Activation::CellOccupied);
        assert_eq!(game, before);
    }

    #[test]
    fn test_decided_game_is_ignored() {
        let mut game = GameState::replay(&[at(0), at(3), at(1), at(4), at(2)]);
        assert_eq!(game.status(), GameStatus::Winner(Player::X));
        let before = game.clone();
        assert_eq!(game.activate_cell(at(8)), Activation::GameDecided);
        assert_eq!(game, before);
    }

    #[test]
    fn test_history_length_after_move_from_k() {
        let mut game = GameState::replay(&[at(0), at(1), at(2), at(3)]);
        for k in 0..game.history().len() {
            let mut branch = game.clone();
            branch.jump_to(k).expect("k in range");
            // Cell 8 is empty on every snapshot of this game.
            assert!(branch.activate_cell(at(8)).is_placed());
            assert_eq!(branch.history().len(), k + 2);
            assert_eq!(branch.history()[..=k], game.history()[..=k]);
        }
        game.jump_to(0).expect("start exists");
        assert_eq!(game.history().len(), 5);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut game = GameState::replay(&[at(4)]);
        let before = game.clone();
        assert_eq!(
            game.jump_to(2),
            Err(HistoryError::MoveOutOfRange { requested: 2, len: 2 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_recorded_game_must_satisfy_invariants() {
        let empty = serde_json::from_str::<GameState>(r#"{"history":[],"current_move":0}"#);
        let err = empty.expect_err("empty history is rejected").to_string();
        assert!(err.contains("History starts with the empty board"));
        assert!(err.contains("Viewed move is within the history"));

        let dangling = serde_json::json!({ "history": [MoveRecord::start()], "current_move": 1 });
        assert!(serde_json::from_value::<GameState>(dangling).is_err());

        let skipped_turn = serde_json::json!({
            "history": [
                MoveRecord::start(),
                MoveRecord::new(Board::new().with_mark(at(4), Player::O), at(4)),
            ],
            "current_move": 1,
        });
        assert!(serde_json::from_value::<GameState>(skipped_turn).is_err());

        let game = GameState::replay(&[at(4), at(0)]);
        let json = serde_json::to_value(&game).expect("serializable");
        assert_eq!(serde_json::from_value::<GameState>(json).expect("valid game"), game);
    }

    #[test]
    fn test_status_follows_viewed_move() {
        let mut game = GameState::replay(&[at(0), at(3), at(1), at(4), at(2)]);
        game.jump_to(4).expect("move 4 exists");
        assert_eq!(game.status(), GameStatus::NextPlayer(Player::X));
        assert_eq!(game.evaluation().winning_line, None);
        game.jump_to(5).expect("move 5 exists");
        assert_eq!(game.status(), GameStatus::Winner(Player::X));
    }
}
