//! The standard turning-cost move model over a [`Maze`].

use turnpike_core::{Maze, State};

use crate::traits::TurnPather;

/// Cost of one forward step onto an open cell.
pub const STEP_COST: i32 = 1;

/// Cost of a 90° pivot in place.
pub const TURN_COST: i32 = 1000;

/// Move rules for a traveler with a heading in a walled maze.
///
/// Three candidate moves per state: forward (cost [`STEP_COST`], only onto
/// open cells) and a left or right 90° pivot (cost [`TURN_COST`], always
/// legal). A 180° reversal is never a single move; it costs two pivots.
pub struct TurnRules<'m> {
    maze: &'m Maze,
}

impl<'m> TurnRules<'m> {
    /// Create move rules over the given maze.
    pub fn new(maze: &'m Maze) -> Self {
        Self { maze }
    }
}

impl TurnPather for TurnRules<'_> {
    fn successors(&self, s: State, buf: &mut Vec<(State, i32)>) {
        let fwd = s.forward();
        if self.maze.is_open(fwd.pos) {
            buf.push((fwd, STEP_COST));
        }
        buf.push((s.turned_left(), TURN_COST));
        buf.push((s.turned_right(), TURN_COST));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turnpike_core::{Heading, Point};

    fn succs(maze: &Maze, s: State) -> Vec<(State, i32)> {
        let mut buf = Vec::new();
        TurnRules::new(maze).successors(s, &mut buf);
        buf
    }

    #[test]
    fn open_cell_has_three_successors() {
        let m = Maze::parse("#####\n#...#\n#...#\n#####").unwrap();
        let s = State::new(Point::new(2, 1), Heading::East);
        let out = succs(&m, s);
        assert_eq!(out.len(), 3);
        assert!(out.contains(&(State::new(Point::new(3, 1), Heading::East), STEP_COST)));
        assert!(out.contains(&(State::new(Point::new(2, 1), Heading::North), TURN_COST)));
        assert!(out.contains(&(State::new(Point::new(2, 1), Heading::South), TURN_COST)));
    }

    #[test]
    fn wall_blocks_forward_but_not_pivots() {
        let m = Maze::parse("###\n#.#\n###").unwrap();
        let s = State::new(Point::new(1, 1), Heading::East);
        let out = succs(&m, s);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|&(n, c)| n.pos == s.pos && c == TURN_COST));
    }

    #[test]
    fn reversal_is_never_a_single_move() {
        let m = Maze::parse("#####\n#...#\n#####").unwrap();
        let s = State::new(Point::new(2, 1), Heading::East);
        let reversed = State::new(s.pos, Heading::West);
        assert!(succs(&m, s).iter().all(|&(n, _)| n != reversed));
    }

    #[test]
    fn forward_off_the_map_is_blocked() {
        // No bordering wall: stepping off the edge is simply not a move.
        let m = Maze::parse("...").unwrap();
        let s = State::new(Point::new(2, 0), Heading::East);
        let out = succs(&m, s);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|&(n, _)| n.pos == s.pos));
    }
}
