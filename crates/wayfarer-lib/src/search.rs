//! The three search loops: depth-first, breadth-first, and best-first.
//!
//! Every entry point takes the graph (and heuristic, where relevant) as an
//! explicit parameter; there is no ambient graph state. All three return
//! `Ok(Some(path))` when the goal is reached, `Ok(None)` when the frontier
//! was exhausted (a normal outcome, not an error), and `Err` only for
//! malformed input such as an undefined state.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::error::Result;
use crate::frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};
use crate::graph::{Graph, Heuristic, State};
use crate::node::Node;

/// Deduplication policy for depth-first and breadth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dedup {
    /// Track a global visited set and expand each state at most once.
    /// Safe on cyclic graphs; the default.
    #[default]
    Tracked,
    /// Re-expand states freely via different parents. Matches the original
    /// exercise this library grew out of; can loop forever on cyclic
    /// graphs, so only use it on inputs known to be acyclic.
    Naive,
}

/// Depth-first search from `start` to `goal`.
///
/// Seeds a [`StackFrontier`] with the root node and expands neighbors in
/// the graph's listed order, so the traversal is deterministic for a given
/// adjacency list.
pub fn depth_first<S: State>(
    graph: &Graph<S>,
    start: &S,
    goal: &S,
    dedup: Dedup,
) -> Result<Option<Vec<S>>> {
    let mut frontier = StackFrontier::new();
    traverse(graph, &mut frontier, start, goal, dedup)
}

/// Breadth-first search from `start` to `goal`.
///
/// Identical loop to [`depth_first`] over a [`QueueFrontier`], so nodes are
/// expanded in discovery order (level by level) and the first path found
/// has the fewest edges.
pub fn breadth_first<S: State>(
    graph: &Graph<S>,
    start: &S,
    goal: &S,
    dedup: Dedup,
) -> Result<Option<Vec<S>>> {
    let mut frontier = QueueFrontier::new();
    traverse(graph, &mut frontier, start, goal, dedup)
}

/// Shared loop driver for the node-based searches. The frontier decides
/// the exploration order; everything else is identical.
fn traverse<S: State, F: Frontier<S>>(
    graph: &Graph<S>,
    frontier: &mut F,
    start: &S,
    goal: &S,
    dedup: Dedup,
) -> Result<Option<Vec<S>>> {
    frontier.add(Rc::new(Node::root(start.clone())));
    let mut visited: HashSet<S> = HashSet::new();

    while !frontier.is_empty() {
        let node = frontier.remove();
        tracing::trace!(state = %node.state(), path = ?node.path(), "visiting node");

        if node.state() == goal {
            return Ok(Some(node.path()));
        }

        if dedup == Dedup::Tracked && !visited.insert(node.state().clone()) {
            continue;
        }

        for neighbor in graph.neighbors(node.state())? {
            if dedup == Dedup::Tracked && visited.contains(neighbor) {
                continue;
            }
            let child = Node::child(neighbor.clone(), neighbor.clone(), Rc::clone(&node));
            frontier.add(Rc::new(child));
        }
    }

    Ok(None)
}

/// Best-first (cost + heuristic) search from `start` to `goal`.
///
/// Every edge costs 1; the priority of a frontier entry is the accumulated
/// path cost plus the heuristic estimate for its state. Improved costs push
/// a fresh frontier entry rather than updating in place, and the stale
/// entries left behind are discarded lazily at removal time via the
/// visited check. The path is reconstructed from a parent map rather than
/// node chains.
pub fn best_first<S: State>(
    graph: &Graph<S>,
    start: &S,
    goal: &S,
    heuristic: &Heuristic<S>,
) -> Result<Option<Vec<S>>> {
    let mut frontier = PriorityFrontier::new();
    let mut visited: HashSet<S> = HashSet::new();
    let mut parents: HashMap<S, Option<S>> = HashMap::new();
    let mut path_cost: HashMap<S, f64> = HashMap::new();

    frontier.add(0.0, start.clone());
    parents.insert(start.clone(), None);
    path_cost.insert(start.clone(), 0.0);

    while let Some((priority, current)) = frontier.remove() {
        tracing::trace!(state = %current, priority, "visiting state");

        if current == *goal {
            return Ok(Some(reconstruct_path(&parents, goal)));
        }

        // Stale duplicate entry for an already-settled state.
        if !visited.insert(current.clone()) {
            continue;
        }

        let current_cost = path_cost.get(&current).copied().unwrap_or(0.0);
        for neighbor in graph.neighbors(&current)? {
            let new_cost = current_cost + 1.0;
            let known_cost = path_cost.get(neighbor).copied().unwrap_or(f64::INFINITY);
            if !visited.contains(neighbor) || new_cost < known_cost {
                path_cost.insert(neighbor.clone(), new_cost);
                let total_cost = new_cost + heuristic.estimate(neighbor);
                frontier.add(total_cost, neighbor.clone());
                parents.insert(neighbor.clone(), Some(current.clone()));
            }
        }
    }

    Ok(None)
}

fn reconstruct_path<S: State>(parents: &HashMap<S, Option<S>>, goal: &S) -> Vec<S> {
    let mut path = Vec::new();
    let mut current = Some(goal.clone());
    while let Some(state) = current {
        current = parents.get(&state).cloned().flatten();
        path.push(state);
    }
    path.reverse();
    path
}
