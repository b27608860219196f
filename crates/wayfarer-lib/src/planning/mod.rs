//! High-level search planning.
//!
//! This module provides:
//! - [`Algorithm`] - Supported search algorithms (DFS, BFS, best-first)
//! - [`SearchRequest`] - High-level search request
//! - [`SearchPlan`] - Planned path result
//! - [`plan_search`] - Main entry point for computing paths
//!
//! # Strategy Pattern
//!
//! Planning uses the Strategy pattern via the [`Planner`] trait. Each
//! algorithm is encapsulated in its own planner struct, allowing new
//! algorithms to be added without modifying the orchestration logic.
//!
//! # Example
//!
//! ```
//! use wayfarer_lib::{plan_search, test_helpers::sample_graph, SearchRequest};
//!
//! let graph = sample_graph();
//! let request = SearchRequest::breadth_first("A".to_string(), "H".to_string());
//! let plan = plan_search(&graph, &request).expect("path exists");
//! assert_eq!(plan.hop_count(), 3);
//! ```

mod planner;

pub use planner::{
    select_planner, BestFirstPlanner, BreadthFirstPlanner, DepthFirstPlanner, Planner,
};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Graph, Heuristic, State};
use crate::search::Dedup;

/// Supported search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Depth-first search (stack frontier).
    DepthFirst,
    /// Breadth-first search (queue frontier).
    #[default]
    BreadthFirst,
    /// Best-first search (priority frontier, cost plus heuristic).
    BestFirst,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Algorithm::DepthFirst => "dfs",
            Algorithm::BreadthFirst => "bfs",
            Algorithm::BestFirst => "best-first",
        };
        f.write_str(value)
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "best-first" => Ok(Algorithm::BestFirst),
            other => Err(Error::UnknownAlgorithm {
                name: other.to_string(),
            }),
        }
    }
}

/// High-level search request.
#[derive(Debug, Clone)]
pub struct SearchRequest<S: State> {
    pub start: S,
    pub goal: S,
    pub algorithm: Algorithm,
    /// Deduplication policy for DFS/BFS; best-first always tracks visited
    /// states itself.
    pub dedup: Dedup,
    /// Estimates used by best-first search; ignored by the other
    /// algorithms. An empty heuristic means every estimate is zero.
    pub heuristic: Heuristic<S>,
}

impl<S: State> SearchRequest<S> {
    /// Convenience constructor for depth-first requests.
    pub fn depth_first(start: S, goal: S) -> Self {
        Self::new(start, goal, Algorithm::DepthFirst)
    }

    /// Convenience constructor for breadth-first requests.
    pub fn breadth_first(start: S, goal: S) -> Self {
        Self::new(start, goal, Algorithm::BreadthFirst)
    }

    /// Convenience constructor for best-first requests.
    pub fn best_first(start: S, goal: S, heuristic: Heuristic<S>) -> Self {
        Self::new(start, goal, Algorithm::BestFirst).with_heuristic(heuristic)
    }

    /// Build a request for the given algorithm with default options.
    pub fn new(start: S, goal: S, algorithm: Algorithm) -> Self {
        Self {
            start,
            goal,
            algorithm,
            dedup: Dedup::default(),
            heuristic: Heuristic::new(),
        }
    }

    /// Override the deduplication policy.
    pub fn with_dedup(mut self, dedup: Dedup) -> Self {
        self.dedup = dedup;
        self
    }

    /// Attach a heuristic to the request.
    pub fn with_heuristic(mut self, heuristic: Heuristic<S>) -> Self {
        self.heuristic = heuristic;
        self
    }
}

/// Planned path returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct SearchPlan<S: State> {
    pub algorithm: Algorithm,
    pub start: S,
    pub goal: S,
    /// Ordered states from start to goal, both inclusive.
    pub steps: Vec<S>,
}

impl<S: State> SearchPlan<S> {
    /// Number of edges in the path.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute a path using the requested algorithm.
///
/// This is the main entry point for planning. It validates that the start
/// and goal states exist in the graph, dispatches to the planner strategy,
/// and converts frontier exhaustion into [`Error::PathNotFound`]. The
/// low-level search functions in [`crate::search`] keep exhaustion as a
/// normal `Ok(None)` for callers that prefer that shape.
pub fn plan_search<S: State>(graph: &Graph<S>, request: &SearchRequest<S>) -> Result<SearchPlan<S>> {
    if !graph.contains(&request.start) {
        return Err(Error::UnknownStart {
            state: request.start.to_string(),
        });
    }
    if !graph.contains(&request.goal) {
        return Err(Error::UnknownGoal {
            state: request.goal.to_string(),
        });
    }

    let planner = select_planner(request.algorithm);
    let steps = planner
        .find_path(graph, request)?
        .ok_or_else(|| Error::PathNotFound {
            start: request.start.to_string(),
            goal: request.goal.to_string(),
        })?;

    tracing::debug!(
        algorithm = %request.algorithm,
        hops = steps.len().saturating_sub(1),
        "search completed"
    );

    Ok(SearchPlan {
        algorithm: request.algorithm,
        start: request.start.clone(),
        goal: request.goal.clone(),
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names_round_trip() {
        for algorithm in [
            Algorithm::DepthFirst,
            Algorithm::BreadthFirst,
            Algorithm::BestFirst,
        ] {
            let parsed: Algorithm = algorithm.to_string().parse().unwrap();
            assert_eq!(parsed, algorithm);
        }
    }

    #[test]
    fn unknown_algorithm_name_is_rejected() {
        let error = "dijkstra".parse::<Algorithm>().unwrap_err();
        assert!(format!("{error}").contains("unknown algorithm"));
    }

    #[test]
    fn default_request_tracks_visited_states() {
        let request = SearchRequest::breadth_first("A", "B");
        assert_eq!(request.algorithm, Algorithm::BreadthFirst);
        assert_eq!(request.dedup, Dedup::Tracked);
        assert_eq!(request.heuristic.estimate(&"A"), 0.0);
    }

    #[test]
    fn search_plan_hop_count() {
        let plan = SearchPlan {
            algorithm: Algorithm::BreadthFirst,
            start: "A",
            goal: "C",
            steps: vec!["A", "B", "C"],
        };
        assert_eq!(plan.hop_count(), 2);
    }

    #[test]
    fn single_step_plan_has_zero_hops() {
        let plan = SearchPlan {
            algorithm: Algorithm::DepthFirst,
            start: "A",
            goal: "A",
            steps: vec!["A"],
        };
        assert_eq!(plan.hop_count(), 0);
    }
}
