//! **turnpike-core** — foundational types for turning-cost maze search.
//!
//! This crate provides the value types shared across the *turnpike*
//! workspace: geometry primitives, facing directions, search states, and
//! the immutable character [`Maze`] map they describe.

pub mod error;
pub mod geom;
pub mod heading;
pub mod maze;

pub use error::MazeError;
pub use geom::{Point, Range};
pub use heading::{Heading, State};
pub use maze::{FLOOR, GOAL, Maze, START, WALL};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn state_round_trip() {
        let s = State::new(Point::new(3, 7), Heading::West);
        let json = serde_json::to_string(&s).unwrap();
        let back: State = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }

    #[test]
    fn range_round_trip() {
        let r = Range::new(1, 2, 10, 20);
        let json = serde_json::to_string(&r).unwrap();
        let back: Range = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
