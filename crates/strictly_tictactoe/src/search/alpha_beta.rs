//! Mutually recursive alpha-beta evaluators.
//!
//! `maximize` scores a position where X is to move, `minimize` one where O
//! is to move. Both return the exact minimax value whenever it lies inside
//! `(alpha, beta)`; outside the window they return a bound that is enough
//! for the caller to discard the branch.

use super::driver::Searcher;
use crate::action::InvalidAction;
use crate::rules::{Value, apply_action, evaluate, is_terminal, legal_actions};
use crate::types::Board;

/// Lower sentinel bound; below every utility.
pub const NEG_INFINITY: Value = Value::MIN;

/// Upper sentinel bound; above every utility.
pub const INFINITY: Value = Value::MAX;

impl Searcher {
    /// Value of `state` with X to move, searched inside `(alpha, beta)`.
    ///
    /// # Errors
    ///
    /// Propagates [`InvalidAction`] from move application.
    pub fn maximize(
        &mut self,
        state: &Board,
        mut alpha: Value,
        beta: Value,
    ) -> Result<Value, InvalidAction> {
        self.stats.nodes += 1;
        if is_terminal(state) {
            return Ok(evaluate(state));
        }

        let mut v = NEG_INFINITY;
        for action in legal_actions(state) {
            let child = apply_action(state, action)?;
            v = v.max(self.minimize(&child, alpha, beta)?);
            if *self.config.pruning() && v >= beta {
                self.stats.cutoffs += 1;
                return Ok(v);
            }
            alpha = alpha.max(v);
        }

        Ok(v)
    }

    /// Value of `state` with O to move, searched inside `(alpha, beta)`.
    ///
    /// # Errors
    ///
    /// Propagates [`InvalidAction`] from move application.
    pub fn minimize(
        &mut self,
        state: &Board,
        alpha: Value,
        mut beta: Value,
    ) -> Result<Value, InvalidAction> {
        self.stats.nodes += 1;
        if is_terminal(state) {
            return Ok(evaluate(state));
        }

        let mut v = INFINITY;
        for action in legal_actions(state) {
            let child = apply_action(state, action)?;
            v = v.min(self.maximize(&child, alpha, beta)?);
            if *self.config.pruning() && v <= alpha {
                self.stats.cutoffs += 1;
                return Ok(v);
            }
            beta = beta.min(v);
        }

        Ok(v)
    }
}
