//! Wayfarer library entry points.
//!
//! This crate exposes helpers to build an in-memory adjacency graph, run
//! depth-first, breadth-first, and best-first searches over it, and plan
//! paths through the high-level [`plan_search`] orchestrator. Higher-level
//! consumers (the CLI) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod frontier;
pub mod graph;
pub mod input;
pub mod node;
pub mod planning;
pub mod search;
pub mod test_helpers;

pub use error::{Error, Result};
pub use frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};
pub use graph::{Graph, Heuristic, State};
pub use input::{load_graph, load_heuristic};
pub use node::Node;
pub use planning::{plan_search, Algorithm, SearchPlan, SearchRequest};
pub use search::{best_first, breadth_first, depth_first, Dedup};
