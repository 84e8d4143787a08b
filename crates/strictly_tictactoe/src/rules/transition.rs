//! State transitions: the starting position, legal moves, applying a move.

use super::turn::turn_to_move;
use crate::action::{Action, InvalidAction};
use crate::types::{Board, Square};
use std::collections::BTreeSet;
use tracing::{instrument, trace};

/// Returns the starting position: all nine squares empty.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns every empty square as an action.
///
/// The set iterates in `(row, col)` order; a full board yields an empty set.
#[instrument(level = "trace", skip(board))]
pub fn legal_actions(board: &Board) -> BTreeSet<Action> {
    board.empty_squares().collect()
}

/// Returns the board that results from the side to move playing `action`.
///
/// The mark placed is `turn_to_move(board)` computed on the board before the
/// move. The input board is not modified.
///
/// # Errors
///
/// Returns [`InvalidAction::OutOfBounds`] if the coordinates fall outside the
/// grid and [`InvalidAction::Occupied`] if the square already holds a mark.
#[instrument(level = "trace", skip(board))]
pub fn apply_action(board: &Board, action: Action) -> Result<Board, InvalidAction> {
    if !action.in_bounds() {
        return Err(InvalidAction::OutOfBounds {
            row: action.row as i64,
            col: action.col as i64,
        });
    }

    if !board.is_empty(action.row, action.col) {
        return Err(InvalidAction::Occupied {
            row: action.row,
            col: action.col,
        });
    }

    let player = turn_to_move(board);
    let mut next = *board;
    next.set(action.row, action.col, Square::Occupied(player))?;
    trace!(%player, "Placed mark");

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_initial_state_has_nine_actions() {
        assert_eq!(legal_actions(&initial_state()).len(), 9);
    }

    #[test]
    fn test_legal_actions_skip_occupied() {
        let board: Board = "X...O....".parse().unwrap();
        let actions = legal_actions(&board);
        assert_eq!(actions.len(), 7);
        assert!(!actions.contains(&Action::new(0, 0)));
        assert!(!actions.contains(&Action::new(1, 1)));
        assert_eq!(actions.first(), Some(&Action::new(0, 1)));
    }

    #[test]
    fn test_apply_places_side_to_move() {
        let board = apply_action(&initial_state(), Action::new(1, 1)).unwrap();
        assert_eq!(board.get(1, 1), Some(Square::Occupied(Player::X)));

        let board = apply_action(&board, Action::new(0, 0)).unwrap();
        assert_eq!(board.get(0, 0), Some(Square::Occupied(Player::O)));
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let before: Board = "X...O....".parse().unwrap();
        let snapshot = before.to_string();
        let after = apply_action(&before, Action::new(2, 2)).unwrap();
        assert_eq!(before.to_string(), snapshot);
        assert_ne!(before, after);
    }

    #[test]
    fn test_apply_rejects_occupied() {
        let board: Board = "X........".parse().unwrap();
        assert_eq!(
            apply_action(&board, Action::new(0, 0)),
            Err(InvalidAction::Occupied { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_apply_rejects_out_of_bounds() {
        assert_eq!(
            apply_action(&initial_state(), Action::new(3, 0)),
            Err(InvalidAction::OutOfBounds { row: 3, col: 0 })
        );
    }
}
