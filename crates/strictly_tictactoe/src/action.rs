//! First-class action types for tic-tac-toe.
//!
//! An action names a square by zero-based row and column. Whose mark lands
//! there is not part of the action: it is always derived from the board.

use crate::types::SIZE;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move: the square where the side to move places its mark.
///
/// Actions order lexicographically by `(row, col)`, which is also the order
/// the search considers them in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new,
)]
pub struct Action {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Action {
    /// Returns true if both coordinates fall inside the grid.
    pub fn in_bounds(&self) -> bool {
        self.row < SIZE && self.col < SIZE
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl TryFrom<(i64, i64)> for Action {
    type Error = InvalidAction;

    /// Converts signed coordinates from external input.
    fn try_from((row, col): (i64, i64)) -> Result<Self, Self::Error> {
        let out_of_bounds = InvalidAction::OutOfBounds { row, col };
        let row = usize::try_from(row).map_err(|_| out_of_bounds)?;
        let col = usize::try_from(col).map_err(|_| out_of_bounds)?;
        let action = Action::new(row, col);
        if action.in_bounds() {
            Ok(action)
        } else {
            Err(out_of_bounds)
        }
    }
}

/// Error raised when an action cannot be applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidAction {
    /// The coordinates fall outside the 3x3 grid.
    #[display("Action ({}, {}) is outside the 3x3 grid", row, col)]
    OutOfBounds {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },

    /// The target square already holds a mark.
    #[display("Square ({}, {}) is already occupied", row, col)]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}
