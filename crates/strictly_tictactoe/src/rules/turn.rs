//! Side-to-move inference.

use crate::types::{Board, Player};
use tracing::instrument;

/// Returns the player whose turn it is.
///
/// X moves whenever both players have the same number of marks (including
/// the empty board), O otherwise. No turn counter is stored anywhere: the
/// board alone decides.
#[instrument(level = "trace", skip(board))]
pub fn turn_to_move(board: &Board) -> Player {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}
