//! Tests for the tic-tac-toe board model.

use std::collections::HashSet;
use strictly_tictactoe::{
    Action, Board, InvalidAction, LINES, Player, Square, apply_action, evaluate, initial_state,
    is_terminal, legal_actions, turn_to_move, winner,
};

/// Every position reachable from the empty board, terminal ones included.
fn reachable_positions() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board) || is_terminal(&board) {
            continue;
        }
        for action in legal_actions(&board) {
            stack.push(apply_action(&board, action).unwrap());
        }
    }
    seen
}

#[test]
fn test_reachable_position_count() {
    assert_eq!(reachable_positions().len(), 5478);
}

#[test]
fn test_turn_alternates_on_every_move() {
    assert_eq!(turn_to_move(&initial_state()), Player::X);

    for board in reachable_positions() {
        if is_terminal(&board) {
            continue;
        }
        let mover = turn_to_move(&board);
        for action in legal_actions(&board) {
            let next = apply_action(&board, action).unwrap();
            assert_eq!(next.get(action.row, action.col), Some(Square::Occupied(mover)));
            assert_eq!(turn_to_move(&next), mover.opponent());
        }
    }
}

#[test]
fn test_initial_state_has_nine_actions() {
    let board = initial_state();
    assert_eq!(legal_actions(&board).len(), 9);
    assert!(board.squares().iter().all(|s| *s == Square::Empty));
}

#[test]
fn test_full_board_has_no_actions() {
    let board: Board = "XOX / XOO / OXX".parse().unwrap();
    assert!(is_terminal(&board));
    assert_eq!(winner(&board), None);
    assert!(legal_actions(&board).is_empty());
}

#[test]
fn test_apply_does_not_mutate_input() {
    let board: Board = "X.. / .O. / ...".parse().unwrap();
    let before = board;
    let rendered = board.to_string();

    let next = apply_action(&board, Action::new(2, 2)).unwrap();

    assert_eq!(board, before);
    assert_eq!(board.to_string(), rendered);
    assert!(board.is_empty(2, 2));
    assert_eq!(next.get(2, 2), Some(Square::Occupied(Player::X)));
}

#[test]
fn test_negative_coordinates_are_rejected() {
    assert_eq!(
        Action::try_from((-1, 1)),
        Err(InvalidAction::OutOfBounds { row: -1, col: 1 })
    );
    assert_eq!(
        Action::try_from((1, -1)),
        Err(InvalidAction::OutOfBounds { row: 1, col: -1 })
    );
}

#[test]
fn test_coordinates_past_the_grid_are_rejected() {
    let board = initial_state();
    assert_eq!(
        apply_action(&board, Action::new(3, 0)),
        Err(InvalidAction::OutOfBounds { row: 3, col: 0 })
    );
    assert_eq!(
        apply_action(&board, Action::new(0, 3)),
        Err(InvalidAction::OutOfBounds { row: 0, col: 3 })
    );
    assert_eq!(
        Action::try_from((0, 3)),
        Err(InvalidAction::OutOfBounds { row: 0, col: 3 })
    );
}

#[test]
fn test_occupied_square_is_rejected() {
    let board = apply_action(&initial_state(), Action::new(1, 1)).unwrap();
    let result = apply_action(&board, Action::new(1, 1));
    assert_eq!(result, Err(InvalidAction::Occupied { row: 1, col: 1 }));
    assert!(result.unwrap_err().to_string().contains("occupied"));
}

#[test]
fn test_winner_rows() {
    let top: Board = "XXX / OO. / ...".parse().unwrap();
    let middle: Board = "OO. / XXX / ...".parse().unwrap();
    let bottom: Board = "OO. / ... / XXX".parse().unwrap();
    assert_eq!(winner(&top), Some(Player::X));
    assert_eq!(winner(&middle), Some(Player::X));
    assert_eq!(winner(&bottom), Some(Player::X));
}

#[test]
fn test_winner_columns() {
    let left: Board = "OX. / OX. / O.X".parse().unwrap();
    let centre: Board = "XO. / XO. / .O.".parse().unwrap();
    let right: Board = "X.O / X.O / ..O".parse().unwrap();
    assert_eq!(winner(&left), Some(Player::O));
    assert_eq!(winner(&centre), Some(Player::O));
    assert_eq!(winner(&right), Some(Player::O));
}

#[test]
fn test_winner_diagonals() {
    let main: Board = "XO. / .XO / ..X".parse().unwrap();
    let anti: Board = "XXO / .O. / OX.".parse().unwrap();
    assert_eq!(winner(&main), Some(Player::X));
    assert_eq!(winner(&anti), Some(Player::O));
}

#[test]
fn test_lines_cover_each_line_once() {
    let unique: HashSet<[Action; 3]> = LINES.iter().copied().collect();
    assert_eq!(unique.len(), 8);
}

#[test]
fn test_evaluate_terminal_positions() {
    assert_eq!(evaluate(&"XXX / OO. / ...".parse().unwrap()), 1);
    assert_eq!(evaluate(&"XX. / OOO / X..".parse().unwrap()), -1);
    assert_eq!(evaluate(&"XOX / XOO / OXX".parse().unwrap()), 0);
}
