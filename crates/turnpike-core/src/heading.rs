//! [`Heading`] and [`State`] — the directional unit of maze search.

use std::fmt;

use crate::geom::Point;

/// A cardinal facing direction.
///
/// The discriminants index into fixed lookup tables, so `heading as usize`
/// is a stable array index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Heading {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

/// Unit vector per heading, in screen coordinates (y grows down).
const DELTAS: [Point; 4] = [
    Point::new(0, -1), // North
    Point::new(1, 0),  // East
    Point::new(0, 1),  // South
    Point::new(-1, 0), // West
];

const LEFT: [Heading; 4] = [Heading::West, Heading::North, Heading::East, Heading::South];
const RIGHT: [Heading; 4] = [Heading::East, Heading::South, Heading::West, Heading::North];

impl Heading {
    /// All four headings, in index order.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// The unit vector this heading moves along.
    #[inline]
    pub const fn delta(self) -> Point {
        DELTAS[self as usize]
    }

    /// Heading after a 90° counter-clockwise pivot.
    #[inline]
    pub const fn left(self) -> Heading {
        LEFT[self as usize]
    }

    /// Heading after a 90° clockwise pivot.
    #[inline]
    pub const fn right(self) -> Heading {
        RIGHT[self as usize]
    }

    /// Stable index in `0..4` for flat-array addressing.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Heading from an index in `0..4`. Panics on anything else.
    #[inline]
    pub const fn from_index(i: usize) -> Heading {
        Self::ALL[i]
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Heading::North => "north",
            Heading::East => "east",
            Heading::South => "south",
            Heading::West => "west",
        };
        f.write_str(s)
    }
}

/// A search state: a position plus the direction being faced.
///
/// The same cell reached under different headings has different future
/// costs, so `State`, not `Point`, is the unit of search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub pos: Point,
    pub heading: Heading,
}

impl State {
    /// Create a new state.
    #[inline]
    pub const fn new(pos: Point, heading: Heading) -> Self {
        Self { pos, heading }
    }

    /// The state one step forward, same heading.
    #[inline]
    pub fn forward(self) -> State {
        State::new(self.pos + self.heading.delta(), self.heading)
    }

    /// The state after pivoting 90° counter-clockwise in place.
    #[inline]
    pub fn turned_left(self) -> State {
        State::new(self.pos, self.heading.left())
    }

    /// The state after pivoting 90° clockwise in place.
    #[inline]
    pub fn turned_right(self) -> State {
        State::new(self.pos, self.heading.right())
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} facing {}", self.pos, self.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotations_cycle() {
        for h in Heading::ALL {
            assert_eq!(h.left().right(), h);
            assert_eq!(h.right().left(), h);
            assert_eq!(h.left().left().left().left(), h);
            assert_eq!(h.right().right().right().right(), h);
        }
    }

    #[test]
    fn left_right_reach_opposite() {
        // Two quarter turns either way end up reversed.
        for h in Heading::ALL {
            assert_eq!(h.left().left(), h.right().right());
            assert_ne!(h.left().left(), h);
        }
    }

    #[test]
    fn deltas_are_unit_vectors() {
        for h in Heading::ALL {
            let d = h.delta();
            assert_eq!(d.x.abs() + d.y.abs(), 1);
        }
        assert_eq!(Heading::North.delta(), Point::new(0, -1));
        assert_eq!(Heading::East.delta(), Point::new(1, 0));
    }

    #[test]
    fn index_round_trip() {
        for h in Heading::ALL {
            assert_eq!(Heading::from_index(h.index()), h);
        }
    }

    #[test]
    fn state_moves() {
        let s = State::new(Point::new(3, 3), Heading::East);
        assert_eq!(s.forward(), State::new(Point::new(4, 3), Heading::East));
        assert_eq!(s.turned_left().heading, Heading::North);
        assert_eq!(s.turned_right().heading, Heading::South);
        // Pivots stay in place.
        assert_eq!(s.turned_left().pos, s.pos);
    }
}
