//! Selecting a search algorithm by name.

use std::{fmt, str::FromStr};

use log::debug;
use serde::{Deserialize, Serialize};

use super::{
    heuristic::Heuristic,
    informed, local,
    problem::{Cost, Problem, Solution},
    uninformed,
};

/// Every graph search the crate offers.
///
/// Configuration files use the same names and aliases as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Algorithm {
    DepthFirst,
    #[default]
    BreadthFirst,
    UniformCost,
    DepthLimited,
    IterativeDeepening,
    GreedyBestFirst,
    AStar,
    HillClimbing,
    IterativeDeepeningAStar,
    LocalHillClimbing,
}

/// Tuning knobs for the bounded algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    /// Depth bound for [`Algorithm::DepthLimited`].
    pub depth: usize,
    /// Cost budget for [`Algorithm::IterativeDeepeningAStar`].
    pub cost: Cost,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            depth: 10,
            cost: f64::INFINITY,
        }
    }
}

impl Algorithm {
    pub const ALL: [Algorithm; 10] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::UniformCost,
        Algorithm::DepthLimited,
        Algorithm::IterativeDeepening,
        Algorithm::GreedyBestFirst,
        Algorithm::AStar,
        Algorithm::HillClimbing,
        Algorithm::IterativeDeepeningAStar,
        Algorithm::LocalHillClimbing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "dfs",
            Algorithm::BreadthFirst => "bfs",
            Algorithm::UniformCost => "ucs",
            Algorithm::DepthLimited => "dls",
            Algorithm::IterativeDeepening => "ids",
            Algorithm::GreedyBestFirst => "greedy",
            Algorithm::AStar => "a-star",
            Algorithm::HillClimbing => "hill-climbing",
            Algorithm::IterativeDeepeningAStar => "ida-star",
            Algorithm::LocalHillClimbing => "local",
        }
    }

    /// Whether the algorithm consults a heuristic.
    pub fn is_informed(self) -> bool {
        matches!(
            self,
            Algorithm::GreedyBestFirst
                | Algorithm::AStar
                | Algorithm::HillClimbing
                | Algorithm::IterativeDeepeningAStar
        )
    }

    /// Run this algorithm. Uninformed algorithms ignore `heuristic`.
    pub fn run<P, H>(
        self,
        problem: &P,
        start: &P::State,
        goal: &P::State,
        heuristic: &H,
        limits: Limits,
    ) -> Solution<P::State>
    where
        P: Problem,
        H: Heuristic<P::State>,
    {
        debug!("running {self} from {start:?} to {goal:?}");
        match self {
            Algorithm::DepthFirst => uninformed::depth_first(problem, start, goal),
            Algorithm::BreadthFirst => uninformed::breadth_first(problem, start, goal),
            Algorithm::UniformCost => uninformed::uniform_cost(problem, start, goal),
            Algorithm::DepthLimited => {
                let (outcome, stats) =
                    uninformed::depth_limited_with_stats(problem, start, goal, limits.depth);
                Solution {
                    path: outcome.into_path(),
                    stats,
                }
            }
            Algorithm::IterativeDeepening => uninformed::iterative_deepening(problem, start, goal),
            Algorithm::GreedyBestFirst => {
                informed::greedy_best_first(problem, start, goal, heuristic)
            }
            Algorithm::AStar => informed::a_star(problem, start, goal, heuristic),
            Algorithm::HillClimbing => informed::hill_climbing(problem, start, goal, heuristic),
            Algorithm::IterativeDeepeningAStar => {
                informed::iterative_deepening_a_star(problem, start, goal, heuristic, limits.cost)
            }
            Algorithm::LocalHillClimbing => local::hill_climbing(problem, start, goal),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        let alias = match normalised.as_str() {
            "a*" | "astar" => "a-star",
            "ida*" | "idastar" => "ida-star",
            "greedy-bfs" | "greedy-best-first" => "greedy",
            "hill" | "hillclimbing" => "hill-climbing",
            "local-search" => "local",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == alias)
            .ok_or_else(|| crate::Error::UnknownAlgorithm {
                input: s.to_string(),
                expected: Self::ALL.map(Algorithm::as_str).join(", "),
            })
    }
}

impl From<Algorithm> for String {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.as_str().to_string()
    }
}

impl TryFrom<String> for Algorithm {
    type Error = crate::Error;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{GraphProblem, NamedHeuristic};

    #[test]
    fn names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.as_str().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert_eq!("A*".parse::<Algorithm>().unwrap(), Algorithm::AStar);
        assert_eq!("Greedy BFS".parse::<Algorithm>().unwrap(), Algorithm::GreedyBestFirst);
        assert!("beam".parse::<Algorithm>().is_err());
    }

    #[test]
    fn serde_uses_command_line_names() {
        for algorithm in Algorithm::ALL {
            let json = serde_json::to_string(&algorithm).unwrap();
            assert_eq!(json, format!("\"{}\"", algorithm.as_str()));
            assert_eq!(serde_json::from_str::<Algorithm>(&json).unwrap(), algorithm);
        }
        let aliased: Algorithm = serde_json::from_str(r#""IDA*""#).unwrap();
        assert_eq!(aliased, Algorithm::IterativeDeepeningAStar);
        assert!(serde_json::from_str::<Algorithm>(r#""iterative-deepening-a-star""#).is_err());
    }

    #[test]
    fn depth_limited_reports_its_work() {
        let graph = GraphProblem::parse("A -> B\nB -> C\nC -> D").unwrap();
        let solution = Algorithm::DepthLimited.run(
            &graph,
            &"A".into(),
            &"D".into(),
            &NamedHeuristic::IsGoal,
            Limits::default(),
        );
        assert!(solution.found());
        assert_eq!(solution.stats.expanded, 3);
        assert!(solution.stats.generated >= 3);
    }

    #[test]
    fn every_complete_algorithm_reaches_the_goal() {
        let graph = GraphProblem::parse("A -> B : 1\nA -> C : 4\nB -> C : 1\nC -> D : 1").unwrap();
        let complete = [
            Algorithm::DepthFirst,
            Algorithm::BreadthFirst,
            Algorithm::UniformCost,
            Algorithm::DepthLimited,
            Algorithm::IterativeDeepening,
            Algorithm::GreedyBestFirst,
            Algorithm::AStar,
            Algorithm::IterativeDeepeningAStar,
        ];
        for algorithm in complete {
            let solution = algorithm.run(
                &graph,
                &"A".into(),
                &"D".into(),
                &NamedHeuristic::IsGoal,
                Limits::default(),
            );
            assert!(solution.found(), "{algorithm} found no path");
            assert_eq!(solution.path.last().map(String::as_str), Some("D"));
            assert!(solution.path.is_connected(&graph));
        }
    }
}
