//! A* search with an admissible heuristic

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashMap},
};

use tracing::{debug, trace};

use super::{Solution, path::PathTracker};
use crate::{
    Error, Result,
    config::SearchLimits,
    ports::Heuristic,
};

/// A state waiting in the open list.
///
/// The node refers to the state it was generated from, not to another node,
/// so path reconstruction only needs the tracker.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    pub state: S,
    pub parent: Option<S>,
    /// Moves from the start
    pub g: usize,
    /// Heuristic estimate of the moves left
    pub h: usize,
}

impl<S> SearchNode<S> {
    pub fn f(&self) -> usize {
        self.g + self.h
    }
}

// Open-list entry; the heap pops the lowest (f, h, insertion order) first.
struct OpenEntry<S> {
    node: SearchNode<S>,
    seq: usize,
}

impl<S> OpenEntry<S> {
    fn rank(&self) -> (usize, usize, usize) {
        (self.node.f(), self.node.h, self.seq)
    }
}

impl<S> PartialEq for OpenEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }
}

impl<S> Eq for OpenEntry<S> {}

impl<S> PartialOrd for OpenEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for OpenEntry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.rank().cmp(&self.rank())
    }
}

/// Find a shortest path from `start` to a goal state using A*.
///
/// The open list is ordered by ascending `f = g + h`, ties broken by lower
/// `h` and then by insertion order. A successor is skipped when it is already
/// closed or open with a cost that is not worse; a closed state is only
/// reopened for a strictly cheaper `g`. Superseded open entries stay in the
/// heap and are dropped when popped.
///
/// # Errors
///
/// Returns [`Error::Unsolvable`] when the open list runs dry and
/// [`Error::BudgetExhausted`] when `limits` stop the search first.
pub fn a_star<S: Heuristic>(start: &S, limits: SearchLimits) -> Result<Solution<S>> {
    let mut open = BinaryHeap::new();
    let mut best_g: HashMap<String, usize> = HashMap::new();
    let mut closed: HashMap<String, usize> = HashMap::new();
    let mut tracker = PathTracker::new();
    let mut seq = 0;
    let mut expanded = 0;

    best_g.insert(start.key(), 0);
    open.push(OpenEntry {
        node: SearchNode {
            state: start.clone(),
            parent: None,
            g: 0,
            h: start.estimate(),
        },
        seq,
    });

    while let Some(OpenEntry { node, .. }) = open.pop() {
        let key = node.state.key();
        let superseded = best_g.get(&key).is_some_and(|&g| g < node.g);
        let finalized = closed.get(&key).is_some_and(|&g| g <= node.g);
        if superseded || finalized {
            continue;
        }

        closed.insert(key, node.g);
        tracker.record(node.state.clone(), node.parent.as_ref());

        if node.state.is_goal() {
            let path = tracker.path_to(&node.state);
            debug!(
                expanded,
                closed = closed.len(),
                moves = node.g,
                "A* reached the goal"
            );
            return Ok(Solution { path, expanded });
        }

        if limits.exceeded(expanded) {
            debug!(expanded, "A* ran out of budget");
            return Err(Error::BudgetExhausted { expanded });
        }
        expanded += 1;
        trace!(state = %node.state.key(), g = node.g, h = node.h, "expanding");

        let g = node.g + 1;
        for next in node.state.successors() {
            let next_key = next.key();
            if closed.get(&next_key).is_some_and(|&closed_g| closed_g <= g) {
                continue;
            }
            if best_g.get(&next_key).is_some_and(|&open_g| open_g <= g) {
                continue;
            }

            best_g.insert(next_key, g);
            seq += 1;
            let h = next.estimate();
            open.push(OpenEntry {
                node: SearchNode {
                    state: next,
                    parent: Some(node.state.clone()),
                    g,
                    h,
                },
                seq,
            });
        }
    }

    debug!(expanded, "A* exhausted the open list");
    Err(Error::Unsolvable { expanded })
}
