//! Shared fixtures for unit tests, integration tests, and benches.

use crate::graph::{Graph, Heuristic};

/// The eight-state fixture graph used throughout the test suites:
///
/// ```text
/// A -> B, C       E -> B, H
/// B -> D, E       F -> C, H
/// C -> F, G       G -> C
/// D -> B          H -> E, F
/// ```
///
/// Cyclic, with two distinct three-edge paths from A to H.
pub fn sample_graph() -> Graph<String> {
    [
        ("A", vec!["B", "C"]),
        ("B", vec!["D", "E"]),
        ("C", vec!["F", "G"]),
        ("D", vec!["B"]),
        ("E", vec!["B", "H"]),
        ("F", vec!["C", "H"]),
        ("G", vec!["C"]),
        ("H", vec!["E", "F"]),
    ]
    .into_iter()
    .map(|(state, neighbors)| {
        (
            state.to_string(),
            neighbors.into_iter().map(String::from).collect(),
        )
    })
    .collect()
}

/// Estimates toward goal `H` for [`sample_graph`].
pub fn sample_heuristic() -> Heuristic<String> {
    [
        ("A", 3.0),
        ("B", 2.0),
        ("C", 2.0),
        ("D", 3.0),
        ("E", 1.0),
        ("F", 3.0),
        ("G", 3.0),
        ("H", 0.0),
    ]
    .into_iter()
    .map(|(state, estimate)| (state.to_string(), estimate))
    .collect()
}
