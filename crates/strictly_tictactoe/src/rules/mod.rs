//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions over [`Board`](crate::Board) values.
//! None of them mutate their input; transitions hand back a fresh board.

pub mod draw;
pub mod outcome;
pub mod transition;
pub mod turn;
pub mod utility;
pub mod win;

pub use draw::is_full;
pub use outcome::{Outcome, is_terminal, outcome};
pub use transition::{apply_action, initial_state, legal_actions};
pub use turn::turn_to_move;
pub use utility::{Value, evaluate};
pub use win::{LINES, winner};
