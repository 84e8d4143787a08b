//! Text reports printed by the solver commands.

use anyhow::{Context, Result, bail};
use strictly_tictactoe::{
    Board, Player, SearchConfig, Searcher, outcome, play_out, turn_to_move,
};
use tracing::{debug, instrument};

/// Parses a board from the command line and checks the mark counts.
///
/// X moves first, so a board reached by legal play has as many X marks as
/// O marks, or exactly one more.
#[instrument]
pub fn parse_board(text: &str) -> Result<Board> {
    let board: Board = text
        .parse()
        .with_context(|| format!("Invalid board {:?}", text))?;

    let x = board.count(Player::X);
    let o = board.count(Player::O);
    if x != o && x != o + 1 {
        bail!("Board has {} X marks and {} O marks; X moves first and play alternates", x, o);
    }

    debug!(x, o, "Board parsed");
    Ok(board)
}

/// Reports the optimal move, or why there is none.
#[instrument(skip(board))]
pub fn best_move_report(board: &Board, config: &SearchConfig) -> Result<String> {
    let mut searcher = Searcher::new(*config);
    let report = match searcher.best_move(board)? {
        Some(action) => format!("{} {}", action.row, action.col),
        None => match outcome(board) {
            Some(result) => format!("none (game over: {})", result),
            None => "none".to_string(),
        },
    };
    debug!(stats = %searcher.stats(), "Best move computed");
    Ok(report)
}

/// Reports the value of every legal move for the side to move.
#[instrument(skip(board))]
pub fn analyze_report(board: &Board, config: &SearchConfig) -> Result<String> {
    if let Some(result) = outcome(board) {
        return Ok(format!("{}\n\nGame over: {}", board, result));
    }

    let mut searcher = Searcher::new(*config);
    let values = searcher.action_values(board)?;
    let best = searcher.best_move(board)?;

    let mut report = format!("{}\n\n{} to move\n", board, turn_to_move(board));
    for (action, value) in values {
        let marker = if Some(action) == best { "  <- best" } else { "" };
        report.push_str(&format!("{} {}  {:+}{}\n", action.row, action.col, value, marker));
    }
    report.push_str(&format!("\nSearched {}", searcher.stats()));
    Ok(report)
}

/// Reports an optimal self-play line from `board`.
#[instrument(skip(board))]
pub fn play_report(board: &Board, config: &SearchConfig) -> Result<String> {
    let line = play_out(board, config)?;

    let mut report = format!("{}\n", board);
    let mut current = *board;
    for (action, next) in &line {
        let player = turn_to_move(&current);
        report.push_str(&format!("\n{} plays {} {}\n{}\n", player, action.row, action.col, next));
        current = *next;
    }

    let result = outcome(&current).context("Self-play stopped before the game ended")?;
    report.push_str(&format!("\nResult: {}", result));
    Ok(report)
}
