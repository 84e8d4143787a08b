//! Command-line interface for strictly_solver.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Solver - optimal play for tic-tac-toe positions
///
/// Boards are nine squares in row-major order: `X`, `O`, and `.` for empty.
/// Whitespace and the separators `|`, `-`, `+`, `/` are ignored, so
/// `"XO. / .X. / ..O"` is a valid board.
#[derive(Parser, Debug)]
#[command(name = "strictly_solver")]
#[command(about = "Alpha-beta minimax solver for tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML search configuration
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable alpha-beta cutoffs (plain minimax)
    #[arg(long, global = true)]
    pub no_pruning: bool,

    /// Examine every root move even after finding a forced win
    #[arg(long, global = true)]
    pub no_early_exit: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for the side to move
    BestMove {
        /// Board to solve
        board: String,
    },

    /// Print the minimax value of every legal move
    Analyze {
        /// Board to analyze
        board: String,
    },

    /// Play optimal moves for both sides until the game ends
    Play {
        /// Starting board (defaults to the empty board)
        board: Option<String>,
    },
}
