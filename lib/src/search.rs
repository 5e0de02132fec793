//! Uniform-cost exploration over caller-defined search states.
//!
//! A state is whatever the cost model needs it to be: a bare [`Coordinate`](crate::Coordinate)
//! for a plain walk, or a `(Coordinate, Direction)` pair when facing affects cost.
//! Edge costs, the goal test, and any admissible lower bound on the remaining cost
//! are all injected by the caller, so nothing about a particular puzzle's cost
//! model lives here.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

/// Best-known accumulated cost per explored state, produced by [`explore`].
///
/// A state missing from the table was never reached (or was cut off by the lower
/// bound); callers must treat an absent distance as "no path", not as an error.
#[derive(Clone, Debug)]
pub struct DistanceTable<S> {
    distances: FxHashMap<S, u64>,
    best_goal_cost: Option<u64>,
}

// manual impls: the map field needs S: Eq + Hash, which a derive would not require
impl<S: Eq + Hash> PartialEq for DistanceTable<S> {
    fn eq(&self, other: &Self) -> bool {
        self.distances == other.distances && self.best_goal_cost == other.best_goal_cost
    }
}

impl<S: Eq + Hash> Eq for DistanceTable<S> {}

impl<S: Eq + Hash> DistanceTable<S> {
    /// Lowest accumulated cost recorded for `state`, `None` if it was never reached.
    pub fn distance(&self, state: &S) -> Option<u64> {
        self.distances.get(state).copied()
    }

    /// Cheapest cost at which any state passed the goal test, if one did.
    pub fn best_goal_cost(&self) -> Option<u64> {
        self.best_goal_cost
    }

    /// All recorded `(state, cost)` pairs, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> {
        self.distances.iter().map(|(state, &cost)| (state, cost))
    }
}

/// Cost of the cheapest path from `start` to any state passing `is_goal`, or `None`
/// if the whole reachable state space is exhausted without meeting one.
///
/// `successors` maps a state to its `(next state, edge cost)` transitions. The queue
/// uses the decrease-key-via-duplicate-insert pattern; ties on cost are broken by the
/// `Ord` of the state itself, which only chooses among equally cheap answers and
/// never affects the returned cost.
pub fn cheapest_cost<S, I>(
    start: S,
    mut successors: impl FnMut(&S) -> I,
    mut is_goal: impl FnMut(&S) -> bool,
) -> Option<u64>
where
    S: Copy + Eq + Hash + Ord,
    I: IntoIterator<Item = (S, u64)>,
{
    let mut best: FxHashMap<S, u64> = FxHashMap::default();
    best.insert(start, 0);
    let mut queue = BinaryHeap::from([Reverse((0, start))]);

    while let Some(Reverse((cost, state))) = queue.pop() {
        if best.get(&state).is_some_and(|&known| known < cost) {
            // stale duplicate; this state was reached more cheaply since
            continue;
        }
        if is_goal(&state) {
            return Some(cost);
        }

        for (next, edge_cost) in successors(&state) {
            let next_cost = cost + edge_cost;
            if best.get(&next).map_or(true, |&known| next_cost < known) {
                best.insert(next, next_cost);
                queue.push(Reverse((next_cost, next)));
            }
        }
    }

    None
}

/// Explore every reachable state from `start`, returning the full best-distance table.
///
/// Goal states are recorded but not expanded, and the cheapest cost at which one was
/// met is kept on the table. `lower_bound` must be a provable lower bound on the cost
/// still needed to reach a goal from the given state: once a complete path is known,
/// any queue entry whose `cost + lower_bound` strictly exceeds it is dropped without
/// expansion. Ties survive, so every state on some optimal path stays in the table
/// for reconstruction with [`on_best_paths`]. Pass `|_| 0` to disable the pruning.
pub fn explore<S, I>(
    start: S,
    mut successors: impl FnMut(&S) -> I,
    mut is_goal: impl FnMut(&S) -> bool,
    mut lower_bound: impl FnMut(&S) -> u64,
) -> DistanceTable<S>
where
    S: Copy + Eq + Hash + Ord,
    I: IntoIterator<Item = (S, u64)>,
{
    let mut distances: FxHashMap<S, u64> = FxHashMap::default();
    distances.insert(start, 0);
    let mut queue = BinaryHeap::from([Reverse((0, start))]);
    let mut best_goal_cost = u64::MAX;

    while let Some(Reverse((cost, state))) = queue.pop() {
        if distances.get(&state).is_some_and(|&known| known < cost) {
            continue;
        }
        if cost.saturating_add(lower_bound(&state)) > best_goal_cost {
            continue;
        }
        if is_goal(&state) {
            best_goal_cost = best_goal_cost.min(cost);
            continue;
        }

        for (next, edge_cost) in successors(&state) {
            let next_cost = cost + edge_cost;
            if distances.get(&next).map_or(true, |&known| next_cost < known) {
                distances.insert(next, next_cost);
                queue.push(Reverse((next_cost, next)));
            }
        }
    }

    DistanceTable {
        distances,
        best_goal_cost: (best_goal_cost != u64::MAX).then_some(best_goal_cost),
    }
}

/// Walk a [`DistanceTable`] backward and collect every state lying on some optimal path.
///
/// The walk seeds from the supplied `goals` that achieved the cheapest recorded goal
/// distance, then repeatedly admits any predecessor `P` of an admitted state `S` for
/// which `distance(P) == distance(S) - cost(P, S)`. `predecessors` maps a state to its
/// possible `(predecessor, edge cost)` pairs; predecessors that were never explored
/// are skipped. Returns the empty set when none of the goals was reached.
pub fn on_best_paths<S, I>(
    table: &DistanceTable<S>,
    goals: impl IntoIterator<Item = S>,
    mut predecessors: impl FnMut(&S) -> I,
) -> FxHashSet<S>
where
    S: Copy + Eq + Hash,
    I: IntoIterator<Item = (S, u64)>,
{
    let reached: Vec<(S, u64)> = goals
        .into_iter()
        .filter_map(|goal| table.distance(&goal).map(|cost| (goal, cost)))
        .collect();
    let Some(best) = reached.iter().map(|&(_, cost)| cost).min() else {
        return FxHashSet::default();
    };

    let mut on_paths: FxHashSet<S> = FxHashSet::default();
    let mut pending: Vec<(S, u64)> = Vec::new();
    for (goal, cost) in reached {
        if cost == best && on_paths.insert(goal) {
            pending.push((goal, cost));
        }
    }

    while let Some((state, cost)) = pending.pop() {
        for (previous, edge_cost) in predecessors(&state) {
            let Some(previous_cost) = cost.checked_sub(edge_cost) else {
                continue;
            };
            if table.distance(&previous) == Some(previous_cost) && on_paths.insert(previous) {
                pending.push((previous, previous_cost));
            }
        }
    }

    on_paths
}
