//! One player's session: the game plus presentation preferences.

use replay_tictactoe::{Activation, GameState, HistoryError, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Order in which the move list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl MoveOrder {
    /// Creates the order from the `ascending` config flag.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    /// Returns the other order.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label of the control that switches to the other order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Descending",
            Self::Descending => "Ascending",
        }
    }
}

/// A running game session.
///
/// The move order is a viewing preference and never affects the game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    game: GameState,
    order: MoveOrder,
}

impl Session {
    /// Starts a session at the empty board.
    #[instrument]
    pub fn new(order: MoveOrder) -> Self {
        info!(?order, "Starting new session");
        Self {
            game: GameState::new(),
            order,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Current move-list order.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// Activates a cell on the viewed board.
    #[instrument(skip(self))]
    pub fn activate_cell(&mut self, pos: Position) -> Activation {
        let activation = self.game.activate_cell(pos);
        debug!(%activation, status = %self.game.status(), "Cell activated");
        activation
    }

    /// Views an earlier or later move.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), HistoryError> {
        self.game.jump_to(move_index)
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
        debug!(order = ?self.order, "Move order toggled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label_names_the_other_order() {
        assert_eq!(MoveOrder::Ascending.toggle_label(), "Descending");
        assert_eq!(MoveOrder::Descending.toggle_label(), "Ascending");
        assert_eq!(MoveOrder::Ascending.toggle().toggle(), MoveOrder::Ascending);
    }

    #[test]
    fn test_toggling_order_leaves_game_untouched() {
        let mut session = Session::new(MoveOrder::from_ascending(true));
        session.activate_cell(Position::Center);
        let game = session.game().clone();
        session.toggle_order();
        assert_eq!(session.order(), MoveOrder::Descending);
        assert_eq!(session.game(), &game);
    }
}
