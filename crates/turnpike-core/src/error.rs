//! Error type for maze construction and queries.

use crate::geom::Point;

/// Errors from building or querying a [`Maze`](crate::Maze).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    /// A lookup touched a position outside the maze rectangle.
    #[error("position {0} is outside the maze bounds")]
    OutOfBounds(Point),

    /// A marker that must occur exactly once was missing or duplicated.
    #[error("marker '{symbol}' found {count} times, expected exactly one")]
    MarkerNotUnique { symbol: char, count: usize },

    /// The input text contained no rows.
    #[error("maze text is empty")]
    Empty,

    /// A row's length differed from the first row's.
    #[error("row {line} has length {got}, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        got: usize,
    },
}
