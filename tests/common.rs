//! Common test utilities for the boardsearch test suite.
//!
//! Exhaustive helpers over the reachable space of small puzzles, used as the
//! reference when checking the searches.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use boardsearch::sliding::SlidingBoard;

/// Every board reachable from `start`, in breadth-first order.
pub fn reachable(start: &SlidingBoard) -> Vec<SlidingBoard> {
    let mut seen = HashMap::new();
    let mut queue = VecDeque::from([start.clone()]);
    let mut order = Vec::new();
    seen.insert(start.serialize(), ());

    while let Some(board) = queue.pop_front() {
        for next in board.successors() {
            if seen.insert(next.serialize(), ()).is_none() {
                queue.push_back(next);
            }
        }
        order.push(board);
    }
    order
}

/// True minimum number of moves to a goal for every board reachable from
/// `start` that can reach one.
///
/// Slides are reversible, so a multi-source breadth-first pass from all goal
/// boards over the successor relation yields the distances.
pub fn distances_to_goal(start: &SlidingBoard) -> HashMap<String, usize> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    for board in reachable(start) {
        if board.is_goal() {
            dist.insert(board.serialize(), 0);
            queue.push_back(board);
        }
    }

    while let Some(board) = queue.pop_front() {
        let d = dist[&board.serialize()];
        for next in board.successors() {
            dist.entry(next.serialize()).or_insert_with(|| {
                queue.push_back(next.clone());
                d + 1
            });
        }
    }
    dist
}
