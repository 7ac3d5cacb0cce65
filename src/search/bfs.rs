//! Breadth-first search

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::{Solution, path::PathTracker};
use crate::{Error, Result, config::SearchLimits, ports::SearchState};

/// Find a shortest path from `start` to a goal state.
///
/// Successors are queued in the order [`SearchState::successors`] returns
/// them, so on equal-length solutions the first one generated wins. A state
/// is never queued twice: the tracker holds every state that was enqueued or
/// expanded.
///
/// # Errors
///
/// Returns [`Error::Unsolvable`] when the reachable space holds no goal and
/// [`Error::BudgetExhausted`] when `limits` stop the search first.
pub fn breadth_first<S: SearchState>(start: &S, limits: SearchLimits) -> Result<Solution<S>> {
    let mut tracker = PathTracker::new();
    let mut frontier = VecDeque::new();
    let mut expanded = 0;

    tracker.discover(start.clone(), None);
    frontier.push_back(start.clone());

    while let Some(state) = frontier.pop_front() {
        if state.is_goal() {
            let path = tracker.path_to(&state);
            debug!(
                expanded,
                discovered = tracker.len(),
                moves = path.len() - 1,
                "breadth-first search reached the goal"
            );
            return Ok(Solution { path, expanded });
        }

        if limits.exceeded(expanded) {
            debug!(expanded, "breadth-first search ran out of budget");
            return Err(Error::BudgetExhausted { expanded });
        }
        expanded += 1;
        trace!(state = %state.key(), "expanding");

        for next in state.successors() {
            if tracker.discover(next.clone(), Some(&state)) {
                frontier.push_back(next);
            }
        }
    }

    debug!(expanded, "breadth-first search exhausted the reachable space");
    Err(Error::Unsolvable { expanded })
}
