//! Error types for search and the high-level solve entry point.

use turnpike_core::{MazeError, State};

/// Errors from the directional search and reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The start state lies outside the search rectangle.
    #[error("start state {0} is outside the search range")]
    StartOutOfRange(State),

    /// The queue drained without finalizing any goal state.
    #[error("no goal state is reachable from the start")]
    UnreachableGoal,

    /// The search hit its defensive expansion budget. Distinct from
    /// [`UnreachableGoal`](SearchError::UnreachableGoal): the maze was not
    /// proven impossible, the search gave up.
    #[error("search exceeded its budget of {0} expansions")]
    BudgetExceeded(u64),
}

/// Anything that can go wrong in [`solve`](crate::solve).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error(transparent)]
    Search(#[from] SearchError),
}
