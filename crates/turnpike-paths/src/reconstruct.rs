//! Recovery of every cell lying on some minimum-cost path.

use std::collections::VecDeque;

use turnpike_core::{Heading, Point, State};

use crate::SearchRange;
use crate::error::SearchError;
use crate::searchrange::{HEADINGS, UNREACHABLE};

/// Result of a solved maze: the minimum cost to any goal and the distinct
/// cells appearing on at least one minimum-cost path, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestPaths {
    pub cost: i32,
    pub cells: Vec<Point>,
}

impl BestPaths {
    /// Number of distinct optimal-path cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

impl SearchRange {
    /// Collect the minimum goal cost and every optimal-path cell from the
    /// tables of the last [`turn_dijkstra`](Self::turn_dijkstra) run.
    ///
    /// A goal cell may be entered under several headings at the same
    /// minimal cost; every such tied goal state seeds the backward walk,
    /// which follows the predecessor sets breadth-first and collapses
    /// headings when collecting cells. A cell reached only by costlier
    /// paths is never included, even if an optimal path crosses the same
    /// position under a different heading.
    pub fn best_paths(&self, goals: &[Point]) -> Result<BestPaths, SearchError> {
        let cur_gen = self.generation;
        let finalized = |i: usize| {
            let n = &self.nodes[i];
            n.generation == cur_gen && !n.open
        };

        let mut best = UNREACHABLE;
        for &g in goals {
            for h in Heading::ALL {
                if let Some(i) = self.idx(State::new(g, h)) {
                    if finalized(i) && self.nodes[i].g < best {
                        best = self.nodes[i].g;
                    }
                }
            }
        }
        if best == UNREACHABLE {
            return Err(SearchError::UnreachableGoal);
        }

        // Seed with every goal state tied at the minimum.
        let mut visited = vec![false; self.nodes.len()];
        let mut queue: VecDeque<usize> = VecDeque::new();
        for &g in goals {
            for h in Heading::ALL {
                if let Some(i) = self.idx(State::new(g, h)) {
                    if finalized(i) && self.nodes[i].g == best && !visited[i] {
                        visited[i] = true;
                        queue.push_back(i);
                    }
                }
            }
        }

        // Backward breadth-first walk over the predecessor DAG.
        let mut cell_seen = vec![false; self.rng.len()];
        let mut cells = Vec::new();
        while let Some(i) = queue.pop_front() {
            let cell = i / HEADINGS;
            if !cell_seen[cell] {
                cell_seen[cell] = true;
                cells.push(self.state(i).pos);
            }
            for &p in &self.preds[i] {
                let p = p as usize;
                if !visited[p] {
                    visited[p] = true;
                    queue.push_back(p);
                }
            }
        }
        cells.sort();

        Ok(BestPaths { cost: best, cells })
    }
}
