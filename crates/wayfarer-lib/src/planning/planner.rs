//! Search strategies implementing the Strategy pattern.
//!
//! This module provides the `Planner` trait and implementations for the
//! three search algorithms. The strategy pattern allows adding new
//! algorithms without modifying the `plan_search` orchestrator.

use crate::error::Result;
use crate::graph::{Graph, State};
use crate::search::{best_first, breadth_first, depth_first};

use super::{Algorithm, SearchRequest};

/// Trait for search strategies.
///
/// Each implementation encapsulates a specific search algorithm and the
/// frontier it drives.
pub trait Planner<S: State>: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> Algorithm;

    /// Execute the search on the given graph.
    ///
    /// Returns `Ok(Some(path))` if the goal was reached, `Ok(None)` when
    /// the frontier was exhausted, and `Err` for malformed input.
    fn find_path(&self, graph: &Graph<S>, request: &SearchRequest<S>) -> Result<Option<Vec<S>>>;

    /// Whether this planner consults the request's heuristic.
    fn uses_heuristic(&self) -> bool {
        false
    }
}

/// Depth-first planner: explores one branch to its end before backtracking.
///
/// Finds some path, not necessarily a short one; which path depends only on
/// the graph's neighbor order.
#[derive(Debug, Clone, Default)]
pub struct DepthFirstPlanner;

impl<S: State> Planner<S> for DepthFirstPlanner {
    fn algorithm(&self) -> Algorithm {
        Algorithm::DepthFirst
    }

    fn find_path(&self, graph: &Graph<S>, request: &SearchRequest<S>) -> Result<Option<Vec<S>>> {
        depth_first(graph, &request.start, &request.goal, request.dedup)
    }
}

/// Breadth-first planner: explores level by level, so the first path found
/// has the fewest edges.
#[derive(Debug, Clone, Default)]
pub struct BreadthFirstPlanner;

impl<S: State> Planner<S> for BreadthFirstPlanner {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BreadthFirst
    }

    fn find_path(&self, graph: &Graph<S>, request: &SearchRequest<S>) -> Result<Option<Vec<S>>> {
        breadth_first(graph, &request.start, &request.goal, request.dedup)
    }
}

/// Best-first planner: orders expansion by accumulated cost plus the
/// request's heuristic estimate. With an empty heuristic it degenerates to
/// uniform-cost search.
#[derive(Debug, Clone, Default)]
pub struct BestFirstPlanner;

impl<S: State> Planner<S> for BestFirstPlanner {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BestFirst
    }

    fn find_path(&self, graph: &Graph<S>, request: &SearchRequest<S>) -> Result<Option<Vec<S>>> {
        best_first(graph, &request.start, &request.goal, &request.heuristic)
    }

    fn uses_heuristic(&self) -> bool {
        true
    }
}

/// Select the appropriate planner for a given algorithm.
pub fn select_planner<S: State>(algorithm: Algorithm) -> Box<dyn Planner<S>> {
    match algorithm {
        Algorithm::DepthFirst => Box::new(DepthFirstPlanner),
        Algorithm::BreadthFirst => Box::new(BreadthFirstPlanner),
        Algorithm::BestFirst => Box::new(BestFirstPlanner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_first_planner_returns_correct_algorithm() {
        let planner = DepthFirstPlanner;
        assert_eq!(Planner::<&str>::algorithm(&planner), Algorithm::DepthFirst);
        assert!(!Planner::<&str>::uses_heuristic(&planner));
    }

    #[test]
    fn breadth_first_planner_returns_correct_algorithm() {
        let planner = BreadthFirstPlanner;
        assert_eq!(
            Planner::<&str>::algorithm(&planner),
            Algorithm::BreadthFirst
        );
    }

    #[test]
    fn best_first_planner_uses_heuristic() {
        let planner = BestFirstPlanner;
        assert_eq!(Planner::<&str>::algorithm(&planner), Algorithm::BestFirst);
        assert!(Planner::<&str>::uses_heuristic(&planner));
    }

    #[test]
    fn select_planner_chooses_correct_type() {
        let planner = select_planner::<&str>(Algorithm::BestFirst);
        assert_eq!(planner.algorithm(), Algorithm::BestFirst);
    }
}
