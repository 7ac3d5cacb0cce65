//! Parent-link bookkeeping for path reconstruction

use std::collections::HashMap;

use crate::ports::SearchState;

/// Records how every discovered state was reached.
///
/// Links are keyed by [`SearchState::key`], so two equal states share one
/// entry no matter how they were built. The path itself is only assembled
/// once a goal is known, by walking the links back to the root.
#[derive(Debug, Clone)]
pub struct PathTracker<S> {
    links: HashMap<String, (S, Option<String>)>,
}

impl<S: SearchState> PathTracker<S> {
    pub fn new() -> Self {
        Self {
            links: HashMap::new(),
        }
    }

    /// Record `state` as reached from `parent` unless it is already known.
    ///
    /// Returns `true` if the state was new.
    pub fn discover(&mut self, state: S, parent: Option<&S>) -> bool {
        let key = state.key();
        if self.links.contains_key(&key) {
            return false;
        }
        self.links.insert(key, (state, parent.map(SearchState::key)));
        true
    }

    /// Record `state` as reached from `parent`, replacing any earlier link
    pub fn record(&mut self, state: S, parent: Option<&S>) {
        let key = state.key();
        self.links.insert(key, (state, parent.map(SearchState::key)));
    }

    /// Number of states with a recorded link
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// States from the root to `state`, inclusive.
    ///
    /// A state without a recorded link yields a single-element path. The
    /// walk never takes more steps than there are links, so a corrupted
    /// chain cannot loop.
    pub fn path_to(&self, state: &S) -> Vec<S> {
        let mut path = vec![state.clone()];
        let mut parent = self
            .links
            .get(&state.key())
            .and_then(|(_, parent)| parent.clone());

        while let Some(key) = parent {
            if path.len() > self.links.len() {
                break;
            }
            let Some((board, next)) = self.links.get(&key) else {
                break;
            };
            path.push(board.clone());
            parent = next.clone();
        }

        path.reverse();
        path
    }
}

impl<S: SearchState> Default for PathTracker<S> {
    fn default() -> Self {
        Self::new()
    }
}
