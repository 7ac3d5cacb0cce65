//! Search-space port - what a single-agent search needs from a state
//!
//! Breadth-first search only needs [`SearchState`]; A* additionally needs a
//! [`Heuristic`]. Board types implement these traits so the searches never
//! depend on a concrete puzzle.

/// A node of an implicit state graph.
///
/// States are values: [`SearchState::successors`] returns fresh states and
/// never mutates `self`.
pub trait SearchState: Clone {
    /// Canonical serialization. Two states with the same key are the same
    /// state; visited sets and parent links are keyed by it.
    fn key(&self) -> String;

    /// Whether this state satisfies the goal
    fn is_goal(&self) -> bool;

    /// All states reachable with one legal move, in a deterministic order.
    ///
    /// An empty vector means no move is available; it is not an error.
    fn successors(&self) -> Vec<Self>;
}

/// Estimate of the remaining number of moves to a goal.
///
/// Implementations used with A* must be admissible: the estimate may never
/// exceed the true minimum number of remaining moves.
pub trait Heuristic: SearchState {
    fn estimate(&self) -> usize;
}
