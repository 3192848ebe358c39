//! Uninformed search: depth-first, breadth-first, uniform-cost,
//! depth-limited and iterative deepening.

use std::collections::{HashSet, VecDeque};

use log::{debug, trace};

use super::{
    frontier::{Entry, Frontier},
    problem::{Bounded, Path, Problem, SearchStats, Solution},
};

/// Depth-first search with a LIFO stack and a global visited set.
///
/// Returns the first path found, which need not be the shortest.
pub fn depth_first<P: Problem>(problem: &P, start: &P::State, goal: &P::State) -> Solution<P::State> {
    let mut stats = SearchStats::default();
    let mut visited = HashSet::new();
    let mut stack = vec![(start.clone(), vec![start.clone()])];

    while let Some((state, path)) = stack.pop() {
        if problem.is_goal(&state, goal) {
            return finish("depth-first", path, stats);
        }
        if !visited.insert(state.clone()) {
            continue;
        }
        stats.expanded += 1;
        trace!("dfs expand {state:?}");
        for next in problem.actions(&state) {
            stats.generated += 1;
            let mut next_path = path.clone();
            next_path.push(next.clone());
            stack.push((next, next_path));
        }
    }

    finish("depth-first", Vec::new(), stats)
}

/// Breadth-first search with a FIFO queue.
///
/// The returned path has the fewest edges of any start-goal path.
pub fn breadth_first<P: Problem>(
    problem: &P,
    start: &P::State,
    goal: &P::State,
) -> Solution<P::State> {
    let mut stats = SearchStats::default();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::from([(start.clone(), vec![start.clone()])]);

    while let Some((state, path)) = queue.pop_front() {
        if problem.is_goal(&state, goal) {
            return finish("breadth-first", path, stats);
        }
        if !visited.insert(state.clone()) {
            continue;
        }
        stats.expanded += 1;
        trace!("bfs expand {state:?}");
        for next in problem.actions(&state) {
            stats.generated += 1;
            let mut next_path = path.clone();
            next_path.push(next.clone());
            queue.push_back((next, next_path));
        }
    }

    finish("breadth-first", Vec::new(), stats)
}

/// Uniform-cost search ordered by accumulated path cost.
///
/// Duplicate frontier entries are not merged. A state is expanded the first
/// time it is dequeued; later, costlier entries for it are skipped. With
/// non-negative costs the returned path is cost-optimal.
pub fn uniform_cost<P: Problem>(
    problem: &P,
    start: &P::State,
    goal: &P::State,
) -> Solution<P::State> {
    let mut stats = SearchStats::default();
    let mut visited = HashSet::new();
    let mut frontier = Frontier::new();
    frontier.push(
        0.0,
        Entry {
            state: start.clone(),
            path: vec![start.clone()],
            cost: 0.0,
        },
    );

    while let Some(Entry { state, path, cost }) = frontier.pop() {
        if problem.is_goal(&state, goal) {
            return finish("uniform-cost", path, stats);
        }
        if !visited.insert(state.clone()) {
            continue;
        }
        stats.expanded += 1;
        trace!("ucs expand {state:?} at cost {cost}");
        for next in problem.actions(&state) {
            stats.generated += 1;
            let next_cost = cost + problem.cost(&state, &next);
            let mut next_path = path.clone();
            next_path.push(next.clone());
            frontier.push(
                next_cost,
                Entry {
                    state: next,
                    path: next_path,
                    cost: next_cost,
                },
            );
        }
    }

    finish("uniform-cost", Vec::new(), stats)
}

/// Depth-limited search.
///
/// Cycles are avoided by checking membership in the current path only, so a
/// state may be revisited through a different branch. A non-goal state at
/// depth `limit` is a cutoff only if it still has a successor off the current
/// path; a dead end there counts as exhausted.
pub fn depth_limited<P: Problem>(
    problem: &P,
    start: &P::State,
    goal: &P::State,
    limit: usize,
) -> Bounded<P::State> {
    depth_limited_with_stats(problem, start, goal, limit).0
}

/// [`depth_limited`], also returning how much work the search did.
pub fn depth_limited_with_stats<P: Problem>(
    problem: &P,
    start: &P::State,
    goal: &P::State,
    limit: usize,
) -> (Bounded<P::State>, SearchStats) {
    let mut path = vec![start.clone()];
    let mut stats = SearchStats::default();
    let outcome = recursive_dls(problem, goal, &mut path, limit, &mut stats);
    debug!(
        "depth-limited (limit {limit}): {} after {} expansions",
        describe(&outcome),
        stats.expanded
    );
    (outcome, stats)
}

fn recursive_dls<P: Problem>(
    problem: &P,
    goal: &P::State,
    path: &mut Vec<P::State>,
    limit: usize,
    stats: &mut SearchStats,
) -> Bounded<P::State> {
    let Some(state) = path.last().cloned() else {
        return Bounded::Exhausted;
    };
    if problem.is_goal(&state, goal) {
        return Bounded::Found(Path::from(path.clone()));
    }
    if limit == 0 {
        let deeper = problem
            .actions(&state)
            .iter()
            .any(|next| !path.contains(next));
        return if deeper {
            Bounded::Cutoff
        } else {
            Bounded::Exhausted
        };
    }

    stats.expanded += 1;
    let mut cutoff = false;
    for next in problem.actions(&state) {
        stats.generated += 1;
        if path.contains(&next) {
            continue;
        }
        path.push(next);
        let outcome = recursive_dls(problem, goal, path, limit - 1, stats);
        path.pop();
        match outcome {
            Bounded::Found(found) => return Bounded::Found(found),
            Bounded::Cutoff => cutoff = true,
            Bounded::Exhausted => {}
        }
    }

    if cutoff {
        Bounded::Cutoff
    } else {
        Bounded::Exhausted
    }
}

/// Iterative deepening: depth-limited search with limits 0, 1, 2, ... until
/// a path is found or a run finishes without a cutoff.
pub fn iterative_deepening<P: Problem>(
    problem: &P,
    start: &P::State,
    goal: &P::State,
) -> Solution<P::State> {
    let mut stats = SearchStats::default();
    let mut limit = 0;
    loop {
        let mut path = vec![start.clone()];
        match recursive_dls(problem, goal, &mut path, limit, &mut stats) {
            Bounded::Found(found) => {
                return finish("iterative-deepening", found.into_inner(), stats);
            }
            Bounded::Exhausted => return finish("iterative-deepening", Vec::new(), stats),
            Bounded::Cutoff => {
                trace!("iterative deepening cut off at limit {limit}");
                limit += 1;
            }
        }
    }
}

pub(crate) fn finish<S>(algorithm: &str, path: Vec<S>, stats: SearchStats) -> Solution<S> {
    debug!(
        "{algorithm}: {} ({} expanded, {} generated)",
        if path.is_empty() {
            "no path".to_string()
        } else {
            format!("path of {} states", path.len())
        },
        stats.expanded,
        stats.generated
    );
    Solution {
        path: Path::from(path),
        stats,
    }
}

pub(crate) fn describe<S>(outcome: &Bounded<S>) -> &'static str {
    match outcome {
        Bounded::Found(_) => "found",
        Bounded::Cutoff => "cutoff",
        Bounded::Exhausted => "exhausted",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::GraphProblem;

    fn sample() -> GraphProblem {
        GraphProblem::parse("A -> B : 1\nA -> C : 4\nB -> C : 1\nC -> D : 1").unwrap()
    }

    fn labels(path: &Path<String>) -> Vec<&str> {
        path.states().iter().map(String::as_str).collect()
    }

    #[test]
    fn dfs_finds_a_path() {
        let graph = sample();
        let solution = depth_first(&graph, &"A".into(), &"D".into());
        let path = labels(&solution.path);
        assert!(path == ["A", "C", "D"] || path == ["A", "B", "C", "D"]);
        assert!(solution.path.is_connected(&graph));
    }

    #[test]
    fn bfs_prefers_fewer_edges() {
        let graph = sample();
        let solution = breadth_first(&graph, &"A".into(), &"D".into());
        assert_eq!(labels(&solution.path), ["A", "C", "D"]);
    }

    #[test]
    fn ucs_prefers_lower_cost() {
        let graph = sample();
        let solution = uniform_cost(&graph, &"A".into(), &"D".into());
        assert_eq!(labels(&solution.path), ["A", "B", "C", "D"]);
        assert_eq!(solution.path.total_cost(&graph), 3.0);
    }

    #[test]
    fn start_equal_to_goal_is_a_single_state_path() {
        let graph = sample();
        let solution = breadth_first(&graph, &"B".into(), &"B".into());
        assert_eq!(labels(&solution.path), ["B"]);
    }

    #[test]
    fn unreachable_goal_gives_empty_path() {
        let graph = sample();
        assert!(depth_first(&graph, &"D".into(), &"A".into()).path.is_empty());
        assert!(breadth_first(&graph, &"D".into(), &"A".into()).path.is_empty());
        assert!(uniform_cost(&graph, &"D".into(), &"A".into()).path.is_empty());
    }

    #[test]
    fn depth_limited_distinguishes_cutoff_from_exhausted() {
        let graph = sample();
        assert_eq!(depth_limited(&graph, &"A".into(), &"D".into(), 1), Bounded::Cutoff);
        assert_eq!(depth_limited(&graph, &"D".into(), &"A".into(), 5), Bounded::Exhausted);
        let Bounded::Found(path) = depth_limited(&graph, &"A".into(), &"D".into(), 2) else {
            panic!("expected a path within two edges");
        };
        assert_eq!(labels(&path), ["A", "C", "D"]);
    }

    #[test]
    fn depth_limited_zero_only_matches_start() {
        let graph = sample();
        assert_eq!(depth_limited(&graph, &"A".into(), &"B".into(), 0), Bounded::Cutoff);
        assert_eq!(
            depth_limited(&graph, &"A".into(), &"A".into(), 0),
            Bounded::Found(Path::from(vec!["A".to_string()]))
        );
    }

    #[test]
    fn dead_ends_at_the_limit_are_exhausted() {
        let graph = GraphProblem::parse("A -> B\nB -> C\nZ").unwrap();
        assert_eq!(depth_limited(&graph, &"A".into(), &"Z".into(), 2), Bounded::Exhausted);
        assert_eq!(depth_limited(&graph, &"A".into(), &"Z".into(), 1), Bounded::Cutoff);

        // C's only successor is already on the path.
        let cycle = GraphProblem::parse("A -> B\nB -> C\nC -> A\nZ").unwrap();
        assert_eq!(depth_limited(&cycle, &"A".into(), &"Z".into(), 2), Bounded::Exhausted);

        let solution = iterative_deepening(&graph, &"A".into(), &"Z".into());
        assert!(solution.path.is_empty());
        assert_eq!(solution.stats.expanded, 1 + 2);
    }

    #[test]
    fn depth_limited_survives_cycles() {
        let graph = GraphProblem::parse("A -> B\nB -> A\nB -> C").unwrap();
        let outcome = depth_limited(&graph, &"A".into(), &"Z".into(), 10);
        assert_eq!(outcome, Bounded::Exhausted);
    }

    #[test]
    fn iterative_deepening_finds_shallowest_path() {
        let graph = sample();
        let solution = iterative_deepening(&graph, &"A".into(), &"D".into());
        assert_eq!(labels(&solution.path), ["A", "C", "D"]);
        assert!(iterative_deepening(&graph, &"D".into(), &"A".into()).path.is_empty());
    }
}
