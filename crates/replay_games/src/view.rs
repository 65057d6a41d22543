//! Presentation model shared by the terminal and browser front ends.
//!
//! Everything here is derived from a [`Session`] on demand. Renderers only
//! lay these values out; they never consult the rules themselves.

use crate::session::{MoveOrder, Session};
use derive_getters::Getters;
use derive_new::new;
use replay_tictactoe::{MoveRecord, Position, Square};
use serde::Serialize;
use tracing::instrument;

/// One square of the grid as it should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters, new)]
pub struct CellView {
    /// Where the square is.
    position: Position,
    /// What it holds.
    square: Square,
    /// Part of the winning line of the viewed board.
    highlighted: bool,
}

impl CellView {
    /// Text shown inside the square.
    pub fn symbol(&self) -> &'static str {
        self.square.symbol()
    }
}

/// One line of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct MoveEntry {
    /// Index into the history (0 is the game start).
    move_number: usize,
    /// Square played by this move.
    placed: Option<Position>,
    /// This is the move being viewed.
    is_current: bool,
    /// Text shown for the entry.
    description: String,
}

impl MoveEntry {
    /// Describes history record `move_number`.
    pub fn from_record(move_number: usize, record: &MoveRecord, current_move: usize) -> Self {
        let is_current = move_number == current_move;
        let placed = record.placed();
        let description = match placed {
            Some(pos) if move_number > 0 => {
                let prefix = if is_current { "You are at" } else { "Go to move" };
                format!("{} #{} - {}", prefix, move_number, pos.coordinates())
            }
            _ => "Go to game start".to_string(),
        };
        Self {
            move_number,
            placed,
            is_current,
            description,
        }
    }

    /// Returns true if the entry should be offered as a jump control.
    pub fn is_jump_target(&self) -> bool {
        !self.is_current
    }
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// The nine squares in row-major order.
    cells: Vec<CellView>,
    /// Status line text.
    status: String,
    /// Whether the viewed board is won or drawn.
    game_over: bool,
    /// Current move-list order.
    order: MoveOrder,
    /// Label of the order toggle.
    #[getter(skip)]
    toggle_label: &'static str,
    /// Move list, already in display order.
    moves: Vec<MoveEntry>,
}

impl GameView {
    /// Builds the view of `session`.
    #[instrument(skip(session))]
    pub fn from_session(session: &Session) -> Self {
        let game = session.game();
        let board = game.current_board();
        let winning_line = game.evaluation().winning_line;

        let cells = Position::ALL
            .iter()
            .map(|pos| {
                let highlighted = winning_line.is_some_and(|line| line.contains(*pos));
                CellView::new(*pos, board.get(*pos), highlighted)
            })
            .collect();

        let mut moves: Vec<_> = game
            .history()
            .iter()
            .enumerate()
            .map(|(n, record)| MoveEntry::from_record(n, record, game.current_move()))
            .collect();
        if session.order() == MoveOrder::Descending {
            moves.reverse();
        }

        let status = game.status();
        Self {
            cells,
            status: status.to_string(),
            game_over: status.is_over(),
            order: session.order(),
            toggle_label: session.order().toggle_label(),
            moves,
        }
    }

    /// Label of the order toggle.
    pub fn toggle_label(&self) -> &&'static str {
        &self.toggle_label
    }

    /// The cell at `pos`.
    pub fn cell(&self, pos: Position) -> &CellView {
        &self.cells[pos.to_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_after(cells: &[usize], order: MoveOrder) -> Session {
        let mut session = Session::new(order);
        for cell in cells {
            let pos = Position::from_index(*cell).expect("index in range");
            assert!(session.activate_cell(pos).is_placed());
        }
        session
    }

    #[test]
    fn test_new_game_view() {
        let view = GameView::from_session(&Session::new(MoveOrder::Ascending));
        assert_eq!(view.status(), "Next player: X");
        assert!(!view.game_over());
        assert!(view.cells().iter().all(|c| !c.highlighted() && c.symbol() == " "));
        assert_eq!(view.moves().len(), 1);
        assert_eq!(view.moves()[0].description(), "Go to game start");
        assert!(!view.moves()[0].is_jump_target());
        assert_eq!(view.toggle_label(), &"Descending");
    }

    #[test]
    fn test_move_descriptions() {
        let mut session = session_after(&[4, 0, 5], MoveOrder::Ascending);
        let view = GameView::from_session(&session);
        let descriptions: Vec<_> = view.moves().iter().map(|m| m.description().as_str()).collect();
        assert_eq!(
            descriptions,
            [
                "Go to game start",
                "Go to move #1 - (2,2)",
                "Go to move #2 - (1,1)",
                "You are at #3 - (2,3)",
            ]
        );

        session.jump_to(0).expect("start exists");
        let view = GameView::from_session(&session);
        assert!(*view.moves()[0].is_current());
        assert_eq!(view.moves()[0].description(), "Go to game start");
        assert_eq!(view.moves()[3].description(), "Go to move #3 - (2,3)");
    }

    #[test]
    fn test_descending_order_reverses_list() {
        let view = GameView::from_session(&session_after(&[4, 0], MoveOrder::Descending));
        let numbers: Vec<_> = view.moves().iter().map(|m| *m.move_number()).collect();
        assert_eq!(numbers, [2, 1, 0]);
        assert_eq!(view.toggle_label(), &"Ascending");
    }

    #[test]
    fn test_winning_line_is_highlighted() {
        let view = GameView::from_session(&session_after(&[4, 0, 1, 3, 7], MoveOrder::Ascending));
        assert_eq!(view.status(), "Winner: X");
        assert!(*view.game_over());
        let highlighted: Vec<_> = view
            .cells()
            .iter()
            .filter(|c| *c.highlighted())
            .map(|c| c.position().to_index())
            .collect();
        assert_eq!(highlighted, [1, 4, 7]);
        assert_eq!(view.cell(Position::Center).symbol(), "X");
    }

    #[test]
    fn test_highlight_follows_viewed_move() {
        let mut session = session_after(&[4, 0, 1, 3, 7], MoveOrder::Ascending);
        session.jump_to(4).expect("move 4 exists");
        let view = GameView::from_session(&session);
        assert!(view.cells().iter().all(|c| !c.highlighted()));
        assert_eq!(view.status(), "Next player: X");
    }
}
