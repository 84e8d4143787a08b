//! Root move selection.

use super::alpha_beta::{INFINITY, NEG_INFINITY};
use super::config::SearchConfig;
use super::stats::SearchStats;
use crate::action::{Action, InvalidAction};
use crate::rules::utility::{O_WINS, X_WINS};
use crate::rules::{Value, apply_action, evaluate, is_terminal, legal_actions, turn_to_move};
use crate::types::{Board, Player};
use tracing::{debug, instrument, trace};

/// Minimax solver with alpha-beta pruning.
///
/// A searcher owns nothing but its configuration and counters, so separate
/// searchers can run on separate threads without coordination. Nothing is
/// cached between calls.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    pub(crate) config: SearchConfig,
    pub(crate) stats: SearchStats,
}

impl Searcher {
    /// Creates a searcher with the given configuration.
    #[instrument]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the counters accumulated so far.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Zeroes the counters.
    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Picks the optimal action for the side to move.
    ///
    /// Returns `Ok(None)` on a finished game. Root actions are tried in
    /// `(row, col)` order and the first one reaching the best value is kept;
    /// with early exit enabled an outright win is returned as soon as it is
    /// found.
    ///
    /// # Errors
    ///
    /// Propagates [`InvalidAction`] from move application.
    #[instrument(skip(self, board), fields(pruning = *self.config.pruning(), early_exit = *self.config.early_exit()))]
    pub fn best_move(&mut self, board: &Board) -> Result<Option<Action>, InvalidAction> {
        if is_terminal(board) {
            debug!("Position is terminal, no move to make");
            return Ok(None);
        }

        let player = turn_to_move(board);
        let (mut best_value, target) = match player {
            Player::X => (NEG_INFINITY, X_WINS),
            Player::O => (INFINITY, O_WINS),
        };
        let mut best_action = None;

        for action in legal_actions(board) {
            let value = self.reply_value(board, action, player)?;
            trace!(%action, value, "Root action scored");

            if *self.config.early_exit() && value == target {
                debug!(%player, %action, stats = %self.stats, "Found forced win");
                return Ok(Some(action));
            }

            let improves = match player {
                Player::X => value > best_value,
                Player::O => value < best_value,
            };
            if improves {
                best_value = value;
                best_action = Some(action);
            }
        }

        debug!(%player, action = ?best_action, value = best_value, stats = %self.stats, "Selected move");
        Ok(best_action)
    }

    /// Minimax value of `board` under optimal play from both sides.
    ///
    /// # Errors
    ///
    /// Propagates [`InvalidAction`] from move application.
    #[instrument(skip(self, board))]
    pub fn value(&mut self, board: &Board) -> Result<Value, InvalidAction> {
        if is_terminal(board) {
            return Ok(evaluate(board));
        }
        match turn_to_move(board) {
            Player::X => self.maximize(board, NEG_INFINITY, INFINITY),
            Player::O => self.minimize(board, NEG_INFINITY, INFINITY),
        }
    }

    /// Exact minimax value of every legal action, in `(row, col)` order.
    ///
    /// Empty for a finished game.
    ///
    /// # Errors
    ///
    /// Propagates [`InvalidAction`] from move application.
    #[instrument(skip(self, board))]
    pub fn action_values(&mut self, board: &Board) -> Result<Vec<(Action, Value)>, InvalidAction> {
        if is_terminal(board) {
            return Ok(Vec::new());
        }

        let player = turn_to_move(board);
        legal_actions(board)
            .into_iter()
            .map(|action| Ok((action, self.reply_value(board, action, player)?)))
            .collect()
    }

    /// Plays `action` for `player` and scores the opponent's best reply with a
    /// full window, so the result is exact.
    fn reply_value(
        &mut self,
        board: &Board,
        action: Action,
        player: Player,
    ) -> Result<Value, InvalidAction> {
        let child = apply_action(board, action)?;
        match player {
            Player::X => self.minimize(&child, NEG_INFINITY, INFINITY),
            Player::O => self.maximize(&child, NEG_INFINITY, INFINITY),
        }
    }
}

/// Picks the optimal action for the side to move with the default configuration.
///
/// Returns `Ok(None)` when the game is already over.
///
/// # Errors
///
/// Propagates [`InvalidAction`] from move application.
#[instrument(skip(board))]
pub fn best_move(board: &Board) -> Result<Option<Action>, InvalidAction> {
    Searcher::default().best_move(board)
}
