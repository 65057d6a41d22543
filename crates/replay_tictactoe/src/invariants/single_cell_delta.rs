//! Single cell delta invariant: each snapshot adds exactly one mark.

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: Consecutive snapshots differ in exactly one square.
///
/// The changed square is the one the record says was placed, it was empty
/// before, and it now holds the mark of the player whose turn it was.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().windows(2).enumerate().all(|(k, pair)| {
            let [before, after] = pair else {
                return false;
            };
            let Some(placed) = after.placed() else {
                return false;
            };
            before.board().diff(after.board()) == [placed]
                && before.board().get(placed) == Square::Empty
                && after.board().get(placed) == Square::Occupied(Player::for_move(k))
        })
    }

    fn description() -> &'static str {
        "Each move places exactly one mark of the player to move"
    }
}
