use std::collections::BinaryHeap;

use log::debug;
use turnpike_core::State;

use crate::SearchRange;
use crate::error::SearchError;
use crate::searchrange::{Node, NodeRef, UNREACHABLE};
use crate::traits::TurnPather;

impl SearchRange {
    /// Run a tie-preserving uniform-cost search from `start`.
    ///
    /// The queue is drained completely, so afterwards every reachable state
    /// carries its exact minimum cost and the complete set of predecessors
    /// achieving that minimum: a strictly better path replaces the
    /// predecessor set, an equal-cost path extends it, a worse one is
    /// dropped. Query results with [`cost_at`](Self::cost_at) and
    /// [`best_paths`](Self::best_paths).
    ///
    /// `max_steps` bounds the number of expansions as a guard against
    /// pathological inputs; [`default_budget`](Self::default_budget) is a
    /// safe choice. Returns the number of states finalized.
    pub fn turn_dijkstra<P: TurnPather>(
        &mut self,
        pather: &P,
        start: State,
        max_steps: u64,
    ) -> Result<usize, SearchError> {
        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        let Some(si) = self.idx(start) else {
            return Err(SearchError::StartOutOfRange(start));
        };

        self.nodes[si] = Node {
            g: 0,
            generation: cur_gen,
            open: true,
        };
        self.preds[si].clear();

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef { idx: si, f: 0 });

        let mut sbuf = std::mem::take(&mut self.sbuf);
        let mut steps: u64 = 0;
        let mut finalized = 0usize;

        while let Some(current) = open.pop() {
            let ci = current.idx;
            let cn = &self.nodes[ci];
            // Skip stale entries: a cheaper path was already finalized.
            if cn.generation != cur_gen || !cn.open {
                continue;
            }

            steps += 1;
            if steps > max_steps {
                self.sbuf = sbuf;
                return Err(SearchError::BudgetExceeded(max_steps));
            }

            let current_g = cn.g;
            self.nodes[ci].open = false;
            finalized += 1;

            let cs = self.state(ci);
            sbuf.clear();
            pather.successors(cs, &mut sbuf);

            for &(ns, step_cost) in sbuf.iter() {
                debug_assert!(step_cost > 0);
                let Some(ni) = self.idx(ns) else {
                    continue;
                };
                let tentative = current_g + step_cost;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative > n.g {
                        continue;
                    }
                    if tentative == n.g {
                        // Tied minimum: record the extra predecessor, keep
                        // the existing queue entry.
                        let ps = &mut self.preds[ni];
                        if !ps.contains(&(ci as u32)) {
                            ps.push(ci as u32);
                        }
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative;
                n.open = true;
                let ps = &mut self.preds[ni];
                ps.clear();
                ps.push(ci as u32);
                open.push(NodeRef {
                    idx: ni,
                    f: tentative,
                });
            }
        }

        self.sbuf = sbuf;
        debug!("search drained: {finalized} states finalized in {steps} expansions");
        Ok(finalized)
    }

    /// The minimum cost to reach `s` found by the last search.
    ///
    /// Returns [`UNREACHABLE`] if `s` is outside the range or was never
    /// reached.
    pub fn cost_at(&self, s: State) -> i32 {
        match self.idx(s) {
            Some(i) if self.nodes[i].generation == self.generation => self.nodes[i].g,
            _ => UNREACHABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turnpike_core::{Heading, Maze, Point};

    use crate::rules::{STEP_COST, TURN_COST, TurnRules};

    fn searched(text: &str, start: State) -> SearchRange {
        let maze = Maze::parse(text).unwrap();
        let mut sr = SearchRange::new(maze.bounds());
        let budget = sr.default_budget();
        sr.turn_dijkstra(&TurnRules::new(&maze), start, budget)
            .unwrap();
        sr
    }

    #[test]
    fn straight_corridor_costs_step_per_cell() {
        let sr = searched(
            "######\n#....#\n######",
            State::new(Point::new(1, 1), Heading::East),
        );
        assert_eq!(
            sr.cost_at(State::new(Point::new(4, 1), Heading::East)),
            3 * STEP_COST
        );
    }

    #[test]
    fn turning_cost_dominates() {
        // Reaching the cell above the start takes one pivot plus one step.
        let sr = searched(
            "###\n#.#\n#.#\n###",
            State::new(Point::new(1, 2), Heading::East),
        );
        assert_eq!(
            sr.cost_at(State::new(Point::new(1, 1), Heading::North)),
            TURN_COST + STEP_COST
        );
    }

    #[test]
    fn reversal_costs_two_pivots() {
        let sr = searched("###\n#.#\n###", State::new(Point::new(1, 1), Heading::East));
        assert_eq!(
            sr.cost_at(State::new(Point::new(1, 1), Heading::West)),
            2 * TURN_COST
        );
    }

    #[test]
    fn walled_off_cell_stays_unreachable() {
        let sr = searched(
            "#####\n#.#.#\n#####",
            State::new(Point::new(1, 1), Heading::East),
        );
        for h in Heading::ALL {
            assert_eq!(sr.cost_at(State::new(Point::new(3, 1), h)), UNREACHABLE);
        }
    }

    #[test]
    fn start_outside_range_is_an_error() {
        let maze = Maze::parse("###\n#.#\n###").unwrap();
        let mut sr = SearchRange::new(maze.bounds());
        let start = State::new(Point::new(9, 9), Heading::East);
        assert_eq!(
            sr.turn_dijkstra(&TurnRules::new(&maze), start, 1000),
            Err(SearchError::StartOutOfRange(start))
        );
    }

    #[test]
    fn tiny_budget_trips() {
        let maze = Maze::parse("######\n#....#\n######").unwrap();
        let mut sr = SearchRange::new(maze.bounds());
        let start = State::new(Point::new(1, 1), Heading::East);
        assert_eq!(
            sr.turn_dijkstra(&TurnRules::new(&maze), start, 2),
            Err(SearchError::BudgetExceeded(2))
        );
    }

    #[test]
    fn rerun_reuses_the_range() {
        let maze = Maze::parse("######\n#....#\n######").unwrap();
        let mut sr = SearchRange::new(maze.bounds());
        let rules = TurnRules::new(&maze);
        let start = State::new(Point::new(1, 1), Heading::East);
        let budget = sr.default_budget();

        let a = sr.turn_dijkstra(&rules, start, budget).unwrap();
        let goal = State::new(Point::new(4, 1), Heading::East);
        let cost_a = sr.cost_at(goal);
        let b = sr.turn_dijkstra(&rules, start, budget).unwrap();
        assert_eq!(a, b);
        assert_eq!(sr.cost_at(goal), cost_a);
    }

    #[test]
    fn costs_match_plain_single_predecessor_dijkstra() {
        // The tie-preserving relaxation must not change minimum costs.
        // Compare against an independent textbook Dijkstra over the same
        // successor model.
        use std::collections::{BinaryHeap, HashMap};

        let text = "#######\n#...#E#\n#.#.#.#\n#S....#\n#######";
        let maze = Maze::parse(text).unwrap();
        let rules = TurnRules::new(&maze);
        let start = State::new(Point::new(1, 3), Heading::East);

        let mut best: HashMap<State, i32> = HashMap::new();
        let mut heap: BinaryHeap<std::cmp::Reverse<(i32, usize)>> = BinaryHeap::new();
        let mut states = vec![start];
        best.insert(start, 0);
        heap.push(std::cmp::Reverse((0, 0)));
        let mut buf = Vec::new();
        while let Some(std::cmp::Reverse((g, i))) = heap.pop() {
            let s = states[i];
            if best[&s] < g {
                continue;
            }
            buf.clear();
            rules.successors(s, &mut buf);
            for &(ns, c) in &buf {
                let t = g + c;
                if best.get(&ns).is_none_or(|&b| t < b) {
                    best.insert(ns, t);
                    states.push(ns);
                    heap.push(std::cmp::Reverse((t, states.len() - 1)));
                }
            }
        }

        let mut sr = SearchRange::new(maze.bounds());
        let budget = sr.default_budget();
        sr.turn_dijkstra(&rules, start, budget).unwrap();
        for p in maze.bounds() {
            for h in Heading::ALL {
                let s = State::new(p, h);
                let expected = best.get(&s).copied().unwrap_or(UNREACHABLE);
                assert_eq!(sr.cost_at(s), expected, "cost mismatch at {s}");
            }
        }
    }
}
