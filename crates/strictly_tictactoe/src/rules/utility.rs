//! Terminal utility.

use super::win::winner;
use crate::types::{Board, Player};
use tracing::instrument;

/// Minimax value of a position, from X's point of view.
pub type Value = i32;

/// Value of a position X has won.
pub const X_WINS: Value = 1;

/// Value of a position O has won.
pub const O_WINS: Value = -1;

/// Value of a drawn position.
pub const DRAW: Value = 0;

/// Returns `+1` if X has won, `-1` if O has won and `0` otherwise.
///
/// Only meaningful on terminal boards; a running game also scores `0`.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board) -> Value {
    match winner(board) {
        Some(Player::X) => X_WINS,
        Some(Player::O) => O_WINS,
        None => DRAW,
    }
}
