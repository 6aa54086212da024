//! The plug-in contract every searchable domain implements.

use std::hash::Hash;

use crate::heap::Cost;

/// Describes an implicit graph: how to canonicalize a state, how to step
/// from it, and when to stop.
///
/// `signature` must send semantically equivalent states (including
/// symmetric relabelings) to the same key and must never merge states
/// that can reach the goal at different costs.
pub trait StateEncoder {
    type State: Clone;
    type Key: Eq + Hash + Clone;

    /// Canonical deduplication key for `state`.
    fn signature(&self, state: &Self::State) -> Self::Key;

    /// Every legal single-step successor with its incremental cost.
    fn expand(&self, state: &Self::State) -> Vec<(Self::State, Cost)>;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Lower bound on the remaining cost to a goal. Must be consistent
    /// for the first goal popped to be optimal.
    fn heuristic(&self, _state: &Self::State) -> Cost {
        0
    }
}
