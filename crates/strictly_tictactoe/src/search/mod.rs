//! Adversarial search: minimax with alpha-beta pruning.

mod alpha_beta;
mod config;
mod driver;
mod play;
mod stats;

pub use alpha_beta::{INFINITY, NEG_INFINITY};
pub use config::{ConfigError, SearchConfig};
pub use driver::{Searcher, best_move};
pub use play::play_out;
pub use stats::SearchStats;
