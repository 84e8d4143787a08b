//! Win detection logic for tic-tac-toe.

use crate::action::Action;
use crate::types::{Board, Player, Square};
use tracing::instrument;

const fn at(row: usize, col: usize) -> Action {
    Action { row, col }
}

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Action; 3]; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. In a reachable position at most one player can
/// own a line, so the order lines are checked in does not matter.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a.row, a.col);
        if sq == board.get(b.row, b.col)
            && sq == board.get(c.row, c.col)
            && let Some(Square::Occupied(player)) = sq
        {
            return Some(player);
        }
    }

    None
}
