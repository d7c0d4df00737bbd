//! Generic best-first (A*) search over a [`Problem`] formulation.

use crate::config::SearchConfig;
use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;
use tracing::{debug, trace};

/// A search problem: how states expand, what a step costs, and how far a state is from a goal.
pub trait Problem {
    type State: Clone + Eq + Hash;
    type Action;

    fn initial_state(&self) -> Self::State;

    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Cost of reaching `to` from `from` via `action`, given cost `cost` up to `from`.
    fn path_cost(
        &self,
        cost: f64,
        from: &Self::State,
        action: &Self::Action,
        to: &Self::State,
    ) -> f64;

    /// Estimated remaining cost. Must never overestimate for the result to be optimal.
    fn heuristic(&self, state: &Self::State) -> f64;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped from the frontier and expanded.
    pub expanded: usize,
    /// Successor states produced by transitions.
    pub generated: usize,
    pub peak_frontier: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<S> {
    Solved {
        state: S,
        cost: f64,
        stats: SearchStats,
    },
    /// The frontier emptied without reaching a goal.
    Exhausted { stats: SearchStats },
    /// The expansion budget ran out first.
    Aborted { stats: SearchStats },
}

impl<S> SearchOutcome<S> {
    pub fn stats(&self) -> SearchStats {
        match self {
            SearchOutcome::Solved { stats, .. }
            | SearchOutcome::Exhausted { stats }
            | SearchOutcome::Aborted { stats } => *stats,
        }
    }
}

struct FrontierEntry<S> {
    f: f64,
    g: f64,
    seq: usize,
    state: S,
}

impl<S> PartialEq for FrontierEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S> Eq for FrontierEntry<S> {}

impl<S> PartialOrd for FrontierEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for FrontierEntry<S> {
    // BinaryHeap is a max-heap: lowest f first, then deepest g, then oldest entry.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| self.g.total_cmp(&other.g))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

pub fn astar<P: Problem>(problem: &P, config: &SearchConfig) -> SearchOutcome<P::State> {
    let mut stats = SearchStats::default();
    let mut frontier = BinaryHeap::new();
    let mut best_g: HashMap<P::State, f64> = HashMap::new();
    let mut explored: HashSet<P::State> = HashSet::new();
    let mut seq = 0;

    let initial = problem.initial_state();
    best_g.insert(initial.clone(), 0.0);
    frontier.push(FrontierEntry {
        f: problem.heuristic(&initial),
        g: 0.0,
        seq,
        state: initial,
    });

    while let Some(FrontierEntry { g, state, .. }) = frontier.pop() {
        if explored.contains(&state) || best_g.get(&state).is_some_and(|best| g > *best) {
            continue;
        }
        if problem.is_goal(&state) {
            debug!(
                cost = g,
                expanded = stats.expanded,
                generated = stats.generated,
                "goal reached"
            );
            return SearchOutcome::Solved {
                state,
                cost: g,
                stats,
            };
        }
        if config.max_expansions.is_some_and(|max| stats.expanded >= max) {
            debug!(expanded = stats.expanded, "expansion budget exhausted");
            return SearchOutcome::Aborted { stats };
        }

        stats.expanded += 1;
        let actions = problem.actions(&state);
        trace!(g, successors = actions.len(), "expanding state");

        for action in &actions {
            let child = problem.result(&state, action);
            stats.generated += 1;
            if explored.contains(&child) {
                continue;
            }
            let child_g = problem.path_cost(g, &state, action, &child);
            match best_g.entry(child.clone()) {
                Entry::Occupied(mut known) => {
                    if child_g >= *known.get() {
                        continue;
                    }
                    known.insert(child_g);
                }
                Entry::Vacant(slot) => {
                    slot.insert(child_g);
                }
            }
            seq += 1;
            frontier.push(FrontierEntry {
                f: child_g + problem.heuristic(&child),
                g: child_g,
                seq,
                state: child,
            });
        }
        stats.peak_frontier = stats.peak_frontier.max(frontier.len());
        explored.insert(state);
    }

    debug!(expanded = stats.expanded, "frontier exhausted");
    SearchOutcome::Exhausted { stats }
}
