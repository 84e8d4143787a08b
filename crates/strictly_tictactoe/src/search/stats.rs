//! Counters gathered while searching.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Work done by a [`Searcher`](super::Searcher) since it was created or last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions handed to `maximize` or `minimize`.
    pub(crate) nodes: u64,

    /// Times a sibling loop stopped early on an alpha or beta cutoff.
    pub(crate) cutoffs: u64,
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} nodes, {} cutoffs", self.nodes, self.cutoffs)
    }
}
