//! Optimal self-play.

use super::config::SearchConfig;
use super::driver::Searcher;
use crate::action::{Action, InvalidAction};
use crate::rules::apply_action;
use crate::types::Board;
use tracing::{debug, instrument};

/// Plays optimal moves for both sides from `board` until the game ends.
///
/// Returns each action together with the board it produced; the last board
/// is the final position. An already finished game yields an empty line.
///
/// # Errors
///
/// Propagates [`InvalidAction`] from move application.
#[instrument(skip(board, config))]
pub fn play_out(board: &Board, config: &SearchConfig) -> Result<Vec<(Action, Board)>, InvalidAction> {
    let mut searcher = Searcher::new(*config);
    let mut current = *board;
    let mut line = Vec::new();

    while let Some(action) = searcher.best_move(&current)? {
        current = apply_action(&current, action)?;
        line.push((action, current));
    }

    debug!(plies = line.len(), stats = %searcher.stats(), "Self-play finished");
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{evaluate, initial_state, is_terminal};

    #[test]
    fn test_finished_game_has_empty_line() {
        let board: Board = "XXX / OO. / ...".parse().unwrap();
        assert!(play_out(&board, &SearchConfig::default()).unwrap().is_empty());
    }

    #[test]
    fn test_perfect_game_is_a_draw() {
        let line = play_out(&initial_state(), &SearchConfig::default()).unwrap();
        let (_, last) = line.last().unwrap();
        assert_eq!(line.len(), 9);
        assert!(is_terminal(last));
        assert_eq!(evaluate(last), 0);
    }
}
