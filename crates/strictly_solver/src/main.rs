//! Strictly Solver - command-line front end
//!
//! Solves tic-tac-toe positions with the alpha-beta minimax search from
//! `strictly_tictactoe`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_tictactoe::{Board, SearchConfig};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let output = match &cli.command {
        Command::BestMove { board } => report::best_move_report(&report::parse_board(board)?, &config)?,
        Command::Analyze { board } => report::analyze_report(&report::parse_board(board)?, &config)?,
        Command::Play { board } => {
            let board = match board {
                Some(text) => report::parse_board(text)?,
                None => Board::new(),
            };
            report::play_report(&board, &config)?
        }
    };

    println!("{}", output);
    Ok(())
}

/// Builds the search configuration from the optional file and the flags.
///
/// Flags can only switch features off; they override whatever the file says.
#[instrument(skip(cli), fields(config = ?cli.config))]
fn load_config(cli: &Cli) -> Result<SearchConfig> {
    let mut config = match &cli.config {
        Some(path) => SearchConfig::from_file(path)
            .with_context(|| format!("Could not load {}", path.display()))?,
        None => SearchConfig::default(),
    };

    if cli.no_pruning {
        config = config.with_pruning(false);
    }
    if cli.no_early_exit {
        config = config.with_early_exit(false);
    }

    info!(?config, "Search configured");
    debug!(command = ?cli.command, "Dispatching command");
    Ok(config)
}
