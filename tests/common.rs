//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::{fs, path::PathBuf};

use rand::{Rng, SeedableRng, rngs::StdRng};
use s2p::search::{GraphProblem, Problem};

/// The four-node graph used throughout the documentation.
pub const SAMPLE_GRAPH: &str = "A -> B : 1\nA -> C : 4\nB -> C : 1\nC -> D : 1\n";

pub fn sample_graph() -> GraphProblem {
    GraphProblem::parse(SAMPLE_GRAPH).unwrap()
}

/// A random directed graph over `n0..n{size}` with integer edge costs.
pub fn random_graph(seed: u64, size: usize, density: f64) -> GraphProblem {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = GraphProblem::new();
    let names: Vec<String> = (0..size).map(|i| format!("n{i}")).collect();
    for name in &names {
        graph.add_node(name);
    }
    for from in &names {
        for to in &names {
            if from != to && rng.random_bool(density) {
                graph.add_edge(from, to, rng.random_range(1..=5) as f64);
            }
        }
    }
    graph
}

/// Fewest edges and lowest cost over all simple paths, found exhaustively.
pub fn brute_force_optimum(graph: &GraphProblem, start: &str, goal: &str) -> Option<(usize, f64)> {
    fn walk(
        graph: &GraphProblem,
        goal: &str,
        path: &mut Vec<String>,
        cost: f64,
        best: &mut Option<(usize, f64)>,
    ) {
        let Some(current) = path.last().cloned() else {
            return;
        };
        if current == goal {
            let edges = path.len() - 1;
            *best = Some(match *best {
                Some((e, c)) => (e.min(edges), c.min(cost)),
                None => (edges, cost),
            });
            return;
        }
        for next in graph.actions(&current) {
            if path.contains(&next) {
                continue;
            }
            let step = graph.cost(&current, &next);
            path.push(next);
            walk(graph, goal, path, cost + step, best);
            path.pop();
        }
    }

    let mut best = None;
    walk(graph, goal, &mut vec![start.to_string()], 0.0, &mut best);
    best
}

/// Write `contents` to `name` inside `dir` and return the full path.
pub fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}
