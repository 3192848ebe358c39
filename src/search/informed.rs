//! Informed search: greedy best-first, A*, hill-climbing and
//! iterative-deepening A*.

use std::collections::{HashSet, VecDeque};

use log::{debug, trace};

use super::{
    frontier::{Entry, Frontier},
    heuristic::Heuristic,
    problem::{Bounded, Cost, Path, Problem, SearchStats, Solution},
    uninformed::{describe, finish},
};

/// Greedy best-first search.
///
/// The frontier is a plain FIFO queue; only the successors of each expanded
/// state are sorted by heuristic value before they are enqueued. This is
/// weaker than ordering the whole frontier and gives no optimality guarantee.
pub fn greedy_best_first<P, H>(
    problem: &P,
    start: &P::State,
    goal: &P::State,
    heuristic: &H,
) -> Solution<P::State>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    let mut stats = SearchStats::default();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::from([(start.clone(), vec![start.clone()])]);

    while let Some((state, path)) = queue.pop_front() {
        if problem.is_goal(&state, goal) {
            return finish("greedy best-first", path, stats);
        }
        if !visited.insert(state.clone()) {
            continue;
        }
        stats.expanded += 1;
        trace!("greedy expand {state:?}");

        let mut successors: Vec<(f64, P::State)> = problem
            .actions(&state)
            .into_iter()
            .map(|next| (heuristic.estimate(&next, goal), next))
            .collect();
        successors.sort_by(|a, b| a.0.total_cmp(&b.0));

        for (_, next) in successors {
            stats.generated += 1;
            let mut next_path = path.clone();
            next_path.push(next.clone());
            queue.push_back((next, next_path));
        }
    }

    finish("greedy best-first", Vec::new(), stats)
}

/// A* search ordered by `f = g + h`, ties broken by insertion order.
///
/// Duplicates are handled as in uniform-cost search: the first expansion of
/// a state wins. Optimal when `heuristic` is admissible.
pub fn a_star<P, H>(
    problem: &P,
    start: &P::State,
    goal: &P::State,
    heuristic: &H,
) -> Solution<P::State>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    let mut stats = SearchStats::default();
    let mut visited = HashSet::new();
    let mut frontier = Frontier::new();
    frontier.push(
        heuristic.estimate(start, goal),
        Entry {
            state: start.clone(),
            path: vec![start.clone()],
            cost: 0.0,
        },
    );

    while let Some(Entry { state, path, cost }) = frontier.pop() {
        if problem.is_goal(&state, goal) {
            return finish("a-star", path, stats);
        }
        if !visited.insert(state.clone()) {
            continue;
        }
        stats.expanded += 1;
        trace!("a* expand {state:?} at g = {cost}");
        for next in problem.actions(&state) {
            stats.generated += 1;
            let g = cost + problem.cost(&state, &next);
            let f = g + heuristic.estimate(&next, goal);
            let mut next_path = path.clone();
            next_path.push(next.clone());
            frontier.push(
                f,
                Entry {
                    state: next,
                    path: next_path,
                    cost: g,
                },
            );
        }
    }

    finish("a-star", Vec::new(), stats)
}

/// Steepest-descent hill climbing on the heuristic.
///
/// Walks to the successor with the lowest estimate (first on ties) and stops
/// with an empty path at a dead end or as soon as that successor does not
/// strictly improve on the current estimate. There is no backtracking.
pub fn hill_climbing<P, H>(
    problem: &P,
    start: &P::State,
    goal: &P::State,
    heuristic: &H,
) -> Solution<P::State>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    let mut stats = SearchStats::default();
    let mut walk = vec![start.clone()];
    let mut current = start.clone();

    while !problem.is_goal(&current, goal) {
        stats.expanded += 1;
        let successors = problem.actions(&current);
        stats.generated += successors.len();

        let best = successors
            .into_iter()
            .map(|next| (heuristic.estimate(&next, goal), next))
            .reduce(|best, candidate| if candidate.0 < best.0 { candidate } else { best });

        let Some((best_estimate, next)) = best else {
            trace!("hill climbing reached dead end at {current:?}");
            return finish("hill-climbing", Vec::new(), stats);
        };
        if best_estimate >= heuristic.estimate(&current, goal) {
            trace!("hill climbing stuck at local optimum {current:?}");
            return finish("hill-climbing", Vec::new(), stats);
        }
        walk.push(next.clone());
        current = next;
    }

    finish("hill-climbing", walk, stats)
}

/// Depth-first search bounded by both a depth limit and a cost budget.
///
/// Following an edge spends `cost(edge) + h(neighbor)` of the budget; edges
/// that would overspend it are skipped. Reaching the depth limit at a
/// non-goal state is a cutoff while some affordable successor off the current
/// path remains. States already on the current path are not revisited.
pub fn ida_star_bounded<P, H>(
    problem: &P,
    start: &P::State,
    goal: &P::State,
    heuristic: &H,
    depth_limit: usize,
    cost_limit: Cost,
) -> Bounded<P::State>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    let mut path = vec![start.clone()];
    let mut stats = SearchStats::default();
    let outcome = bounded_search(
        problem,
        goal,
        heuristic,
        &mut path,
        depth_limit,
        cost_limit,
        &mut stats,
    );
    debug!(
        "ida* (depth {depth_limit}, budget {cost_limit}): {}",
        describe(&outcome)
    );
    outcome
}

fn bounded_search<P, H>(
    problem: &P,
    goal: &P::State,
    heuristic: &H,
    path: &mut Vec<P::State>,
    depth_limit: usize,
    cost_limit: Cost,
    stats: &mut SearchStats,
) -> Bounded<P::State>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    let Some(state) = path.last().cloned() else {
        return Bounded::Exhausted;
    };
    if problem.is_goal(&state, goal) {
        return Bounded::Found(Path::from(path.clone()));
    }
    if depth_limit == 0 {
        let deeper = problem.actions(&state).iter().any(|next| {
            !path.contains(next)
                && problem.cost(&state, next) + heuristic.estimate(next, goal) <= cost_limit
        });
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
        let spend = problem.cost(&state, &next) + heuristic.estimate(&next, goal);
        if spend > cost_limit {
            continue;
        }
        path.push(next);
        let outcome = bounded_search(
            problem,
            goal,
            heuristic,
            path,
            depth_limit - 1,
            cost_limit - spend,
            stats,
        );
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

/// Iterative-deepening A*: [`ida_star_bounded`] with depth limits 0, 1, 2, ...
/// until a path is found or a run ends without a cutoff.
///
/// Pass `f64::INFINITY` as `cost_limit` to bound by depth alone.
pub fn iterative_deepening_a_star<P, H>(
    problem: &P,
    start: &P::State,
    goal: &P::State,
    heuristic: &H,
    cost_limit: Cost,
) -> Solution<P::State>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    let mut stats = SearchStats::default();
    let mut depth_limit = 0;
    loop {
        let mut path = vec![start.clone()];
        let outcome = bounded_search(
            problem,
            goal,
            heuristic,
            &mut path,
            depth_limit,
            cost_limit,
            &mut stats,
        );
        match outcome {
            Bounded::Found(found) => return finish("ida*", found.into_inner(), stats),
            Bounded::Exhausted => return finish("ida*", Vec::new(), stats),
            Bounded::Cutoff => depth_limit += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{GraphProblem, GridProblem, NamedHeuristic, ZeroHeuristic, uniform_cost};

    fn sample() -> GraphProblem {
        GraphProblem::parse("A -> B : 1\nA -> C : 4\nB -> C : 1\nC -> D : 1").unwrap()
    }

    fn labels(path: &Path<String>) -> Vec<&str> {
        path.states().iter().map(String::as_str).collect()
    }

    #[test]
    fn a_star_matches_ucs_cost() {
        let graph = sample();
        let solution = a_star(&graph, &"A".into(), &"D".into(), &NamedHeuristic::IsGoal);
        assert_eq!(labels(&solution.path), ["A", "B", "C", "D"]);
        assert_eq!(solution.path.total_cost(&graph), 3.0);
    }

    #[test]
    fn greedy_sorts_successors_by_heuristic() {
        // (1,1) looks closer to the goal, so it is enqueued ahead of (5,5)
        // even though it is listed second.
        let graph = GraphProblem::parse("S -> (5,5)\nS -> (1,1)\n(1,1) -> (0,0)\n(5,5) -> (0,0)")
            .unwrap();
        let solution = greedy_best_first(
            &graph,
            &"S".into(),
            &"(0,0)".into(),
            &NamedHeuristic::Manhattan,
        );
        assert_eq!(labels(&solution.path), ["S", "(1,1)", "(0,0)"]);
    }

    #[test]
    fn hill_climbing_walks_downhill() {
        let grid = GridProblem::parse("S..\n...\n..G").unwrap();
        let solution = hill_climbing(&grid, &grid.start(), &grid.goal(), &NamedHeuristic::Manhattan);
        assert_eq!(solution.path.first(), Some(&(0, 0)));
        assert_eq!(solution.path.last(), Some(&(2, 2)));
        assert_eq!(solution.path.edges(), 4);
        assert!(solution.path.is_connected(&grid));
    }

    #[test]
    fn hill_climbing_fails_at_local_optimum() {
        let grid = GridProblem::parse("S#G\n...").unwrap();
        let solution = hill_climbing(&grid, &grid.start(), &grid.goal(), &NamedHeuristic::Manhattan);
        assert!(solution.path.is_empty());
    }

    #[test]
    fn ida_star_reports_cutoff_then_finds() {
        let graph = sample();
        let shallow = ida_star_bounded(&graph, &"A".into(), &"D".into(), &ZeroHeuristic, 1, f64::INFINITY);
        assert_eq!(shallow, Bounded::Cutoff);

        let solution = iterative_deepening_a_star(
            &graph,
            &"A".into(),
            &"D".into(),
            &ZeroHeuristic,
            f64::INFINITY,
        );
        assert_eq!(labels(&solution.path), ["A", "C", "D"]);
    }

    #[test]
    fn ida_star_cost_budget_prunes_expensive_edges() {
        let graph = sample();
        // A -> C costs 4, which the budget of 3 cannot afford.
        let outcome = ida_star_bounded(&graph, &"A".into(), &"D".into(), &ZeroHeuristic, 5, 3.0);
        assert_eq!(
            outcome.into_path().into_inner(),
            vec!["A".to_string(), "B".into(), "C".into(), "D".into()]
        );
        let starved = ida_star_bounded(&graph, &"A".into(), &"D".into(), &ZeroHeuristic, 5, 2.0);
        assert_eq!(starved, Bounded::Exhausted);
    }

    #[test]
    fn ida_star_dead_ends_at_the_limit_are_exhausted() {
        let graph = GraphProblem::parse("A -> B\nB -> C\nZ").unwrap();
        let deep = ida_star_bounded(&graph, &"A".into(), &"Z".into(), &ZeroHeuristic, 2, f64::INFINITY);
        assert_eq!(deep, Bounded::Exhausted);
        let shallow = ida_star_bounded(&graph, &"A".into(), &"Z".into(), &ZeroHeuristic, 1, f64::INFINITY);
        assert_eq!(shallow, Bounded::Cutoff);
        // B -> C is unaffordable, so nothing lies beyond the limit.
        let broke = ida_star_bounded(&graph, &"A".into(), &"Z".into(), &ZeroHeuristic, 1, 1.0);
        assert_eq!(broke, Bounded::Exhausted);
    }

    #[test]
    fn informed_searches_report_unreachable_goal_as_empty() {
        let graph = sample();
        let h = NamedHeuristic::IsGoal;
        assert!(greedy_best_first(&graph, &"D".into(), &"A".into(), &h).path.is_empty());
        assert!(a_star(&graph, &"D".into(), &"A".into(), &h).path.is_empty());
        assert!(
            iterative_deepening_a_star(&graph, &"D".into(), &"A".into(), &h, f64::INFINITY)
                .path
                .is_empty()
        );
    }

    #[test]
    fn a_star_with_zero_heuristic_is_ucs() {
        let grid = GridProblem::parse("S...\n.##.\n...G").unwrap();
        let a = a_star(&grid, &grid.start(), &grid.goal(), &ZeroHeuristic);
        let u = uniform_cost(&grid, &grid.start(), &grid.goal());
        assert_eq!(a.path.total_cost(&grid), u.path.total_cost(&grid));
    }
}
