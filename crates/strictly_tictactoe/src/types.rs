//! Core domain types for tic-tac-toe.

use crate::action::{Action, InvalidAction};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side length of the grid.
pub const SIZE: usize = 3;

/// Number of squares on the grid.
pub const CELLS: usize = SIZE * SIZE;

/// Player in the game.
///
/// X moves first and is the maximizing side; O is the minimizing side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Empty => write!(f, "."),
            Square::Occupied(player) => write!(f, "{}", player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every transition produces a new board and
/// leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Gets the square at the given row and column.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        if row >= SIZE || col >= SIZE {
            return None;
        }
        self.squares.get(row * SIZE + col).copied()
    }

    /// Sets the square at the given row and column.
    ///
    /// Unlike a move, this does not consult whose turn it is, so it can
    /// build positions that are unreachable in play.
    pub fn set(&mut self, row: usize, col: usize, square: Square) -> Result<(), InvalidAction> {
        if row >= SIZE || col >= SIZE {
            return Err(InvalidAction::OutOfBounds {
                row: row as i64,
                col: col as i64,
            });
        }
        self.squares[row * SIZE + col] = square;
        Ok(())
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Counts the squares occupied by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Iterates over the empty squares in row-major order.
    pub fn empty_squares(&self) -> impl Iterator<Item = Action> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(i, _)| Action::new(i / SIZE, i % SIZE))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                write!(f, "{}", self.squares[row * SIZE + col])?;
                if col < SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error returned when a textual board cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidCharacter(#[error(not(source))] char),

    /// The text did not describe exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongCellCount(#[error(not(source))] usize),
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Reads nine squares in row-major order.
    ///
    /// `X`/`O` (either case) are marks, `.` and `_` are empty squares.
    /// Whitespace and the separators `|`, `-`, `+`, `/` are skipped, so the
    /// `Display` form reads back unchanged.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(CELLS);
        for c in s.chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' => Square::Empty,
                '|' | '-' | '+' | '/' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(BoardParseError::InvalidCharacter(other)),
            };
            squares.push(square);
        }

        let squares: [Square; CELLS] = squares
            .try_into()
            .map_err(|v: Vec<Square>| BoardParseError::WrongCellCount(v.len()))?;
        Ok(Self { squares })
    }
}
