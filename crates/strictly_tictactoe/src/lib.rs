//! Strictly Tic-Tac-Toe - pure game logic and an optimal solver
//!
//! The crate has two layers:
//!
//! - **Rules**: stateless functions over [`Board`] values (whose turn it is,
//!   legal actions, applying an action, win and draw detection, terminal
//!   utility). Boards are `Copy`; a transition always returns a new board.
//! - **Search**: minimax with alpha-beta pruning. [`best_move`] returns the
//!   action that guarantees the best achievable result against a perfect
//!   opponent.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Action, Board, apply_action, best_move, initial_state};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let board: Board = "XX. / OO. / ...".parse()?;
//! assert_eq!(best_move(&board)?, Some(Action::new(0, 2)));
//!
//! let next = apply_action(&initial_state(), Action::new(1, 1))?;
//! assert!(!next.is_empty(1, 1));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod search;
mod types;

pub mod rules;

// Crate-level exports - Domain types
pub use action::{Action, InvalidAction};
pub use types::{Board, BoardParseError, CELLS, Player, SIZE, Square};

// Crate-level exports - Rules
pub use rules::utility::{DRAW, O_WINS, X_WINS};
pub use rules::{
    LINES, Outcome, Value, apply_action, evaluate, initial_state, is_full, is_terminal,
    legal_actions, outcome, turn_to_move, winner,
};

// Crate-level exports - Search
pub use search::{
    ConfigError, INFINITY, NEG_INFINITY, SearchConfig, SearchStats, Searcher, best_move, play_out,
};
