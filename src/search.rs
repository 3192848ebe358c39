//! Graph search over an abstract problem interface
//!
//! - Uninformed: depth-first, breadth-first, uniform-cost, depth-limited,
//!   iterative deepening
//! - Informed: greedy best-first, A*, hill-climbing, iterative-deepening A*
//! - Local: cost-driven hill-climbing
//!
//! Problem providers for text-described graphs and grid mazes live here too.

pub mod algorithm;
mod frontier;
pub mod graph;
pub mod grid;
pub mod heuristic;
pub mod informed;
pub mod local;
pub mod problem;
pub mod uninformed;

pub use algorithm::{Algorithm, Limits};
pub use graph::GraphProblem;
pub use grid::GridProblem;
pub use heuristic::{Heuristic, NamedHeuristic, Planar, ZeroHeuristic};
pub use informed::{
    a_star, greedy_best_first, hill_climbing, ida_star_bounded, iterative_deepening_a_star,
};
pub use problem::{Bounded, Cost, Path, Problem, SearchStats, Solution};
pub use uninformed::{
    breadth_first, depth_first, depth_limited, depth_limited_with_stats, iterative_deepening,
    uniform_cost,
};
