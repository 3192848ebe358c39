//! Search command - Find a path through a graph or a maze

use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::warn;

use crate::{
    cli::{
        config::{AppConfig, SearchConfig},
        output::{format_cost, print_kv, print_path, print_search_stats, print_section},
    },
    search::{
        Algorithm, Bounded, GraphProblem, GridProblem, NamedHeuristic, Path, Planar, Problem,
        uninformed,
    },
};

#[derive(Parser, Debug)]
#[command(about = "Find a path through a graph or a maze")]
pub struct SearchArgs {
    /// Edge-list graph file (`FROM -> TO [: COST]` per line)
    #[arg(long, conflicts_with = "grid", required_unless_present = "grid")]
    pub graph: Option<PathBuf>,

    /// Maze file (`.` open, `#` wall, `S` start, `G` goal)
    #[arg(long)]
    pub grid: Option<PathBuf>,

    /// Search algorithm (dfs, bfs, ucs, dls, ids, greedy, a-star,
    /// hill-climbing, ida-star, local)
    #[arg(long, short = 'a')]
    pub algorithm: Option<Algorithm>,

    /// Start node (graphs only)
    #[arg(long)]
    pub start: Option<String>,

    /// Goal node (graphs only)
    #[arg(long)]
    pub goal: Option<String>,

    /// Heuristic for informed algorithms (manhattan, euclidean, chebyshev, is-goal)
    #[arg(long)]
    pub heuristic: Option<NamedHeuristic>,

    /// Depth bound for depth-limited search
    #[arg(long)]
    pub depth_limit: Option<usize>,

    /// Cost budget for IDA*
    #[arg(long)]
    pub cost_limit: Option<f64>,

    /// JSON configuration file with search defaults
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl SearchArgs {
    /// Flags given on the command line win over the configuration file
    pub fn resolve(&self, mut config: SearchConfig) -> SearchConfig {
        if let Some(algorithm) = self.algorithm {
            config = config.with_algorithm(algorithm);
        }
        if let Some(heuristic) = self.heuristic {
            config = config.with_heuristic(heuristic);
        }
        if let Some(depth) = self.depth_limit {
            config = config.with_depth_limit(depth);
        }
        if let Some(cost) = self.cost_limit {
            config = config.with_cost_limit(cost);
        }
        config
    }
}

pub fn execute(args: SearchArgs) -> Result<()> {
    let config = AppConfig::load_or_default(args.config.as_deref())?;
    let search = args.resolve(config.search);
    if search.cost_limit.is_some_and(|c| !(c.is_finite() && c >= 0.0)) {
        bail!("--cost-limit must be a finite, non-negative number");
    }

    match (&args.graph, &args.grid) {
        (Some(path), _) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read graph {}", path.display()))?;
            let graph = GraphProblem::parse(&text)
                .with_context(|| format!("failed to parse graph {}", path.display()))?;
            let start = args.start.as_deref().context("--start is required with --graph")?;
            let goal = args.goal.as_deref().context("--goal is required with --graph")?;
            let start = graph.require(start)?;
            let goal = graph.require(goal)?;
            report(&graph, &start, &goal, &search, |node: &String| node.clone());
        }
        (None, Some(path)) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read grid {}", path.display()))?;
            let grid = GridProblem::parse(&text)
                .with_context(|| format!("failed to parse grid {}", path.display()))?;
            if args.start.is_some() || args.goal.is_some() {
                warn!("--start and --goal are ignored for grids; using S and G");
            }
            report(&grid, &grid.start(), &grid.goal(), &search, |&(row, col): &(i32, i32)| {
                format!("({row}, {col})")
            });
        }
        (None, None) => bail!("one of --graph or --grid is required"),
    }
    Ok(())
}

/// Run the configured algorithm and print its result
fn report<P, L>(problem: &P, start: &P::State, goal: &P::State, search: &SearchConfig, label: L)
where
    P: Problem,
    P::State: Planar,
    L: Fn(&P::State) -> String,
{
    let algorithm = search.algorithm;
    print_section(&format!(
        "{algorithm} from {} to {}",
        label(start),
        label(goal)
    ));
    if algorithm.is_informed() {
        print_kv("Heuristic", search.heuristic.as_str());
    }

    let relabel = |path: &Path<P::State>| -> Path<String> {
        path.states().iter().map(&label).collect::<Vec<_>>().into()
    };

    if algorithm == Algorithm::DepthLimited {
        print_kv("Depth limit", &search.depth_limit.to_string());
        let (outcome, stats) =
            uninformed::depth_limited_with_stats(problem, start, goal, search.depth_limit);
        match outcome {
            Bounded::Found(path) => print_path(&relabel(&path), path.total_cost(problem)),
            Bounded::Cutoff => {
                println!("No path found.");
                print_kv("Outcome", "cut off at the depth limit");
            }
            Bounded::Exhausted => {
                println!("No path found.");
                print_kv("Outcome", "no path at any depth");
            }
        }
        print_search_stats(&stats);
        return;
    }

    if let (Algorithm::IterativeDeepeningAStar, Some(cost)) = (algorithm, search.cost_limit) {
        print_kv("Cost limit", &format_cost(cost));
    }
    let solution = algorithm.run(problem, start, goal, &search.heuristic, search.limits());
    print_path(&relabel(&solution.path), solution.path.total_cost(problem));
    print_search_stats(&solution.stats);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = SearchArgs {
            graph: None,
            grid: None,
            algorithm: Some(Algorithm::AStar),
            start: None,
            goal: None,
            heuristic: None,
            depth_limit: Some(3),
            cost_limit: None,
            config: None,
        };
        let base = SearchConfig::default()
            .with_heuristic(NamedHeuristic::Euclidean)
            .with_depth_limit(7);
        let resolved = args.resolve(base);
        assert_eq!(resolved.algorithm, Algorithm::AStar);
        assert_eq!(resolved.heuristic, NamedHeuristic::Euclidean);
        assert_eq!(resolved.depth_limit, 3);
    }
}
