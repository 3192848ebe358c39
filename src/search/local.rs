//! Local search driven by step cost alone.

use log::trace;

use super::{
    problem::{Problem, SearchStats, Solution},
    uninformed::finish,
};

/// Hill climbing that treats `cost` as a measure of desirability.
///
/// From the current state, a successor satisfying the goal test ends the
/// walk successfully. Otherwise the walk moves to the cheapest successor
/// (first on ties), provided stepping there is strictly cheaper than
/// `cost(current, goal)` and does not revisit a state already walked. Any
/// other situation is a failure and yields an empty path.
pub fn hill_climbing<P: Problem>(
    problem: &P,
    start: &P::State,
    goal: &P::State,
) -> Solution<P::State> {
    let mut stats = SearchStats::default();
    let mut walk = vec![start.clone()];

    if problem.is_goal(start, goal) {
        return finish("local hill-climbing", walk, stats);
    }

    loop {
        let Some(current) = walk.last().cloned() else {
            return finish("local hill-climbing", Vec::new(), stats);
        };
        stats.expanded += 1;
        let successors = problem.actions(&current);
        stats.generated += successors.len();

        if let Some(reached) = successors.iter().find(|s| problem.is_goal(s, goal)) {
            walk.push(reached.clone());
            return finish("local hill-climbing", walk, stats);
        }

        let best = successors
            .into_iter()
            .map(|next| (problem.cost(&current, &next), next))
            .reduce(|best, candidate| if candidate.0 < best.0 { candidate } else { best });

        let Some((best_cost, next)) = best else {
            trace!("local search dead end at {current:?}");
            return finish("local hill-climbing", Vec::new(), stats);
        };
        if best_cost >= problem.cost(&current, goal) || walk.contains(&next) {
            trace!("local search stuck at {current:?}");
            return finish("local hill-climbing", Vec::new(), stats);
        }
        walk.push(next);
    }
}
