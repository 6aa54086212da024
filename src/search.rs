//! Best-first search driver over any [`StateEncoder`].
//!
//! States are popped from a [`MinHeap`] in non-decreasing priority order.
//! The first pop of a signature is its cheapest arrival, so later pops of
//! the same signature are stale and get dropped. Three modes share the
//! loop:
//! - `shortest`: stop at the first goal popped, returning its path
//! - `enumerate` / `best_by`: no pruning, collect every goal reached
//! - `explore`: settle every reachable signature up to a cost bound

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace, warn};

use crate::encoder::StateEncoder;
use crate::error::SearchError;
use crate::heap::{Cost, HeapItem, MinHeap};

/// Limits applied to a single search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of states expanded before giving up.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    pub fn with_max_expansions(max_expansions: usize) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }
}

/// Work counters for the most recent run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States whose successors were generated.
    pub expanded: usize,
    /// Heap insertions, including the initial state.
    pub pushed: usize,
    /// Pops or children discarded because their signature was already settled.
    pub duplicates: usize,
    /// Largest heap size observed.
    pub peak_frontier: usize,
}

/// A goal reached by the shortest-path search, with the route to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<S> {
    pub cost: Cost,
    /// Every state from the initial one to the goal, inclusive.
    pub path: Vec<S>,
}

impl<S> Solution<S> {
    /// The goal state (last state of the path).
    pub fn goal(&self) -> &S {
        // a path always holds at least the initial state
        &self.path[self.path.len() - 1]
    }

    /// Number of transitions taken.
    pub fn steps(&self) -> usize {
        self.path.len() - 1
    }
}

/// A goal reached in enumeration mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found<S> {
    pub cost: Cost,
    pub state: S,
}

/// A frontier entry.
struct Node<S> {
    priority: Cost,
    cost: Cost,
    state: S,
    /// Index into the settled arena (shortest mode only).
    parent: Option<usize>,
}

impl<S> HeapItem for Node<S> {
    fn priority(&self) -> Cost {
        self.priority
    }
}

/// A finalized state and the settled state it was reached from.
struct Settled<S> {
    state: S,
    parent: Option<usize>,
}

/// Search driver bound to one encoder.
pub struct Search<'a, E: StateEncoder> {
    encoder: &'a E,
    config: SearchConfig,
    stats: SearchStats,
}

impl<'a, E: StateEncoder> Search<'a, E> {
    pub fn new(encoder: &'a E) -> Self {
        Self {
            encoder,
            config: SearchConfig::default(),
            stats: SearchStats::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Counters from the last run.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Finds a minimum-cost route from `initial` to a goal state.
    pub fn shortest(&mut self, initial: E::State) -> Result<Solution<E::State>, SearchError> {
        self.stats = SearchStats::default();
        debug!("shortest-path search started");

        let mut heap = MinHeap::new();
        let mut visited: FxHashSet<E::Key> = FxHashSet::default();
        let mut arena: Vec<Settled<E::State>> = Vec::new();

        let priority = self.encoder.heuristic(&initial);
        self.push(
            &mut heap,
            Node {
                priority,
                cost: 0,
                state: initial,
                parent: None,
            },
        );

        while !heap.is_empty() {
            let node = heap.extract_min()?;

            // first pop wins; anything later arrived no cheaper
            if !visited.insert(self.encoder.signature(&node.state)) {
                self.stats.duplicates += 1;
                continue;
            }

            let index = arena.len();
            arena.push(Settled {
                state: node.state,
                parent: node.parent,
            });
            let current = &arena[index].state;

            if self.encoder.is_goal(current) {
                debug!(cost = node.cost, stats = ?self.stats, "goal found");
                return Ok(Solution {
                    cost: node.cost,
                    path: rebuild_path(&arena, index),
                });
            }

            self.charge_expansion(node.cost)?;
            for (child, step) in self.encoder.expand(current) {
                if visited.contains(&self.encoder.signature(&child)) {
                    self.stats.duplicates += 1;
                    continue;
                }
                let child = self.child_node(node.cost, child, step, Some(index))?;
                self.push(&mut heap, child);
            }
        }

        debug!(stats = ?self.stats, "frontier exhausted without a goal");
        Err(SearchError::NoSolution)
    }

    /// Collects every goal reachable from `initial`, in non-decreasing
    /// cost order.
    ///
    /// Nothing is pruned by signature, so each distinct route to a goal is
    /// reported separately; goal states are not expanded further. The
    /// state space must be finite, or a budget must be configured.
    pub fn enumerate(&mut self, initial: E::State) -> Result<Vec<Found<E::State>>, SearchError> {
        self.stats = SearchStats::default();
        debug!("enumeration search started");

        let mut heap = MinHeap::new();
        let mut goals = Vec::new();

        let priority = self.encoder.heuristic(&initial);
        self.push(
            &mut heap,
            Node {
                priority,
                cost: 0,
                state: initial,
                parent: None,
            },
        );

        while !heap.is_empty() {
            let node = heap.extract_min()?;

            if self.encoder.is_goal(&node.state) {
                goals.push(Found {
                    cost: node.cost,
                    state: node.state,
                });
                continue;
            }

            self.charge_expansion(node.cost)?;
            for (child, step) in self.encoder.expand(&node.state) {
                let child = self.child_node(node.cost, child, step, None)?;
                self.push(&mut heap, child);
            }
        }

        debug!(goals = goals.len(), stats = ?self.stats, "enumeration finished");
        Ok(goals)
    }

    /// Enumerates all goals and keeps the one with the largest `rank`.
    ///
    /// Among equally ranked goals the cheapest (earliest popped) wins.
    pub fn best_by<K, F>(&mut self, initial: E::State, rank: F) -> Result<Found<E::State>, SearchError>
    where
        K: Ord,
        F: Fn(&Found<E::State>) -> K,
    {
        let mut best: Option<(K, Found<E::State>)> = None;
        for found in self.enumerate(initial)? {
            let key = rank(&found);
            let better = best.as_ref().map_or(true, |(best_key, _)| key > *best_key);
            if better {
                best = Some((key, found));
            }
        }

        best.map(|(_, found)| found).ok_or(SearchError::NoSolution)
    }

    /// Settles every signature reachable from `initial` whose minimal cost
    /// is at most `max_cost`, returning those costs.
    ///
    /// The goal predicate and heuristic are ignored.
    pub fn explore(
        &mut self,
        initial: E::State,
        max_cost: Option<Cost>,
    ) -> Result<FxHashMap<E::Key, Cost>, SearchError> {
        self.stats = SearchStats::default();
        debug!(?max_cost, "exploration started");

        let within = |cost: Cost| max_cost.map_or(true, |limit| cost <= limit);
        let mut heap = MinHeap::new();
        let mut settled: FxHashMap<E::Key, Cost> = FxHashMap::default();

        self.push(
            &mut heap,
            Node {
                priority: 0,
                cost: 0,
                state: initial,
                parent: None,
            },
        );

        while !heap.is_empty() {
            let node = heap.extract_min()?;
            let key = self.encoder.signature(&node.state);
            if settled.contains_key(&key) {
                self.stats.duplicates += 1;
                continue;
            }
            settled.insert(key, node.cost);

            self.charge_expansion(node.cost)?;
            for (child, step) in self.encoder.expand(&node.state) {
                let cost = add_cost(node.cost, step)?;
                if !within(cost) {
                    continue;
                }
                if settled.contains_key(&self.encoder.signature(&child)) {
                    self.stats.duplicates += 1;
                    continue;
                }
                self.push(
                    &mut heap,
                    Node {
                        priority: cost,
                        cost,
                        state: child,
                        parent: None,
                    },
                );
            }
        }

        debug!(settled = settled.len(), stats = ?self.stats, "exploration finished");
        Ok(settled)
    }

    fn push(&mut self, heap: &mut MinHeap<Node<E::State>>, node: Node<E::State>) {
        heap.insert(node);
        self.stats.pushed += 1;
        self.stats.peak_frontier = self.stats.peak_frontier.max(heap.size());
    }

    /// Counts one expansion against the budget.
    fn charge_expansion(&mut self, cost: Cost) -> Result<(), SearchError> {
        if let Some(limit) = self.config.max_expansions {
            if self.stats.expanded >= limit {
                warn!(limit, stats = ?self.stats, "search budget exhausted");
                return Err(SearchError::BudgetExhausted {
                    expanded: self.stats.expanded,
                });
            }
        }
        self.stats.expanded += 1;
        trace!(cost, expanded = self.stats.expanded, "expanding state");
        Ok(())
    }

    fn child_node(
        &self,
        parent_cost: Cost,
        state: E::State,
        step: Cost,
        parent: Option<usize>,
    ) -> Result<Node<E::State>, SearchError> {
        let cost = add_cost(parent_cost, step)?;
        let priority = add_cost(cost, self.encoder.heuristic(&state))?;
        Ok(Node {
            priority,
            cost,
            state,
            parent,
        })
    }
}

fn add_cost(base: Cost, extra: Cost) -> Result<Cost, SearchError> {
    base.checked_add(extra)
        .ok_or_else(|| SearchError::InvalidState(format!("cost overflow adding {extra} to {base}")))
}

/// Follows parent links from `index` back to the initial state.
fn rebuild_path<S: Clone>(arena: &[Settled<S>], index: usize) -> Vec<S> {
    let mut path = Vec::new();
    let mut current = Some(index);

    while let Some(i) = current {
        path.push(arena[i].state.clone());
        current = arena[i].parent;
    }

    path.reverse();
    path
}
