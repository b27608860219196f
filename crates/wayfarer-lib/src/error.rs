use thiserror::Error;

/// Convenient result alias for the Wayfarer library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a search expands a state with no adjacency entry.
    ///
    /// This signals malformed input rather than a search outcome: every
    /// reachable state must appear as a key in the graph. It aborts the
    /// current search call and is never downgraded to "no path".
    #[error("state {state} is not defined in the graph")]
    UndefinedState { state: String },

    /// Raised when the requested start state is not part of the graph.
    #[error("unknown start state: {state}")]
    UnknownStart { state: String },

    /// Raised when the requested goal state is not part of the graph.
    #[error("unknown goal state: {state}")]
    UnknownGoal { state: String },

    /// Raised by [`plan_search`](crate::plan_search) when the frontier was
    /// exhausted without reaching the goal. The low-level search functions
    /// report exhaustion as a normal `Ok(None)` instead.
    #[error("no path found between {start} and {goal}")]
    PathNotFound { start: String, goal: String },

    /// Raised when an algorithm name could not be parsed.
    #[error("unknown algorithm: {name} (expected dfs, bfs, or best-first)")]
    UnknownAlgorithm { name: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
