//! Directional shortest-path search for turning-cost mazes.
//!
//! The traveler in these mazes has a position *and* a heading: stepping
//! forward costs 1, pivoting 90° costs 1000, and many distinct routes can
//! tie for the minimum. This crate finds that minimum and the exact set
//! of cells lying on *some* optimal route:
//!
//! - **Tie-preserving Dijkstra** over (position, heading) states
//!   ([`SearchRange::turn_dijkstra`]) — keeps *every* minimum-cost
//!   predecessor, not just the first one found
//! - **Optimal-cell reconstruction** ([`SearchRange::best_paths`]) —
//!   backward walk over the predecessor DAG from all tied goal states
//! - **Move model** ([`TurnRules`]) implementing the [`TurnPather`] trait
//! - **[`solve`]** — the one-call entry point over a parsed
//!   [`Maze`](turnpike_core::Maze)
//!
//! [`SearchRange`] owns and reuses its internal tables so repeated solves
//! over the same rectangle incur no allocations after warm-up.

mod dijkstra;
mod error;
mod reconstruct;
mod rules;
mod searchrange;
mod solve;
mod traits;

pub use error::{SearchError, SolveError};
pub use reconstruct::BestPaths;
pub use rules::{STEP_COST, TURN_COST, TurnRules};
pub use searchrange::{SearchRange, UNREACHABLE};
pub use solve::solve;
pub use traits::TurnPather;
