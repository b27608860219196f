use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Capabilities required of a state identifier.
///
/// A state is an opaque label for a position in the search space. Anything
/// hashable, comparable, and printable qualifies; the blanket impl means
/// callers never implement this trait by hand.
pub trait State: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T: Clone + Eq + Hash + fmt::Debug + fmt::Display> State for T {}

/// Adjacency graph used by the search algorithms.
///
/// Maps each state to an ordered list of neighbor states. Neighbor order is
/// significant: the search loops expand neighbors in exactly the listed
/// order, which makes depth-first traversal deterministic.
///
/// Serializes as a plain JSON object of `state -> [neighbors]`, so a graph
/// file looks like `{"A": ["B", "C"], "B": [], ...}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Graph<S: State> {
    adjacency: HashMap<S, Vec<S>>,
}

impl<S: State> Graph<S> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Insert a state with its ordered neighbor list, replacing any
    /// previous entry for that state.
    pub fn insert(&mut self, state: S, neighbors: Vec<S>) {
        self.adjacency.insert(state, neighbors);
    }

    /// Return the neighbors for a state, in their listed order.
    ///
    /// A state without an adjacency entry is malformed input and yields
    /// [`Error::UndefinedState`]; callers must not treat that as an empty
    /// neighbor list.
    pub fn neighbors(&self, state: &S) -> Result<&[S]> {
        self.adjacency
            .get(state)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::UndefinedState {
                state: state.to_string(),
            })
    }

    /// Whether the graph defines the given state.
    pub fn contains(&self, state: &S) -> bool {
        self.adjacency.contains_key(state)
    }

    /// Number of states defined in the graph.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the graph defines no states at all.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterate over all defined states, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.adjacency.keys()
    }
}

impl<S: State> FromIterator<(S, Vec<S>)> for Graph<S> {
    fn from_iter<I: IntoIterator<Item = (S, Vec<S>)>>(iter: I) -> Self {
        Self {
            adjacency: iter.into_iter().collect(),
        }
    }
}

/// Estimated remaining cost from each state to the goal.
///
/// Used by best-first search to bias expansion order. Entries are optional:
/// a state without an estimate defaults to `0.0`. The library assumes the
/// estimates are non-negative and never verifies admissibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Heuristic<S: State> {
    estimates: HashMap<S, f64>,
}

impl<S: State> Heuristic<S> {
    /// Create an empty (all-zero) heuristic.
    pub fn new() -> Self {
        Self {
            estimates: HashMap::new(),
        }
    }

    /// Record the estimated cost from `state` to the goal.
    pub fn insert(&mut self, state: S, estimate: f64) {
        self.estimates.insert(state, estimate);
    }

    /// Estimated cost from `state` to the goal; `0.0` when absent.
    pub fn estimate(&self, state: &S) -> f64 {
        self.estimates.get(state).copied().unwrap_or(0.0)
    }
}

impl<S: State> FromIterator<(S, f64)> for Heuristic<S> {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            estimates: iter.into_iter().collect(),
        }
    }
}
