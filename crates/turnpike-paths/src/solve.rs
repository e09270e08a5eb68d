//! One-call solve over a parsed maze.

use log::debug;
use turnpike_core::{GOAL, Heading, Maze, START, State};

use crate::error::SolveError;
use crate::reconstruct::BestPaths;
use crate::rules::TurnRules;
use crate::searchrange::SearchRange;

/// Solve a maze end to end: locate the unique start marker (initial
/// heading east), gather all goal markers, run the tie-preserving search
/// and reconstruct the optimal-path cells.
///
/// The maze is read-only and may be solved repeatedly; each call owns its
/// search tables. Callers running many solves over same-sized mazes can
/// instead keep a [`SearchRange`] and drive it directly.
pub fn solve(maze: &Maze) -> Result<BestPaths, SolveError> {
    let start = State::new(maze.find_unique(START)?, Heading::East);
    let goals = maze.find_all(GOAL);
    debug!("solving {} maze, {} goal cells", maze.size(), goals.len());

    let mut range = SearchRange::new(maze.bounds());
    let budget = range.default_budget();
    range.turn_dijkstra(&TurnRules::new(maze), start, budget)?;
    let best = range.best_paths(&goals)?;
    Ok(best)
}
