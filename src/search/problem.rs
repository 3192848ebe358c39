//! The capability contract every searchable state space satisfies, and the
//! values search algorithms hand back.

use std::{fmt, hash::Hash};

use serde::{Deserialize, Serialize};

/// Numeric edge weight.
pub type Cost = f64;

/// A searchable state space.
///
/// Algorithms are written against this trait only and never look inside
/// `State`. Implementations must keep [`Problem::actions`] free of side
/// effects: search calls it repeatedly for the same state.
pub trait Problem {
    /// Opaque identifier for a position in the space. Equality is identity.
    type State: Clone + Eq + Hash + fmt::Debug;

    /// States reachable from `state` in one step, in a stable order.
    ///
    /// A state outside the space has no successors; search treats it as a
    /// dead end rather than an error.
    fn actions(&self, state: &Self::State) -> Vec<Self::State>;

    /// Weight of the step `from -> to`.
    fn cost(&self, _from: &Self::State, _to: &Self::State) -> Cost {
        1.0
    }

    /// Goal test. Defaults to equality with the designated goal.
    fn is_goal(&self, state: &Self::State, goal: &Self::State) -> bool {
        state == goal
    }
}

/// Ordered sequence of states from start to goal, inclusive.
///
/// An empty path means no route exists; it is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path<S>(Vec<S>);

impl<S> Path<S> {
    /// The "no route" path.
    pub fn empty() -> Self {
        Path(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of states on the path.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of edges walked (states minus one, zero for an empty path).
    pub fn edges(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn states(&self) -> &[S] {
        &self.0
    }

    pub fn first(&self) -> Option<&S> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&S> {
        self.0.last()
    }

    pub fn into_inner(self) -> Vec<S> {
        self.0
    }

    /// Sum of step costs along the path.
    pub fn total_cost<P>(&self, problem: &P) -> Cost
    where
        P: Problem<State = S>,
    {
        self.0
            .windows(2)
            .map(|pair| problem.cost(&pair[0], &pair[1]))
            .sum()
    }

    /// Check that every consecutive pair is joined by an edge of `problem`.
    pub fn is_connected<P>(&self, problem: &P) -> bool
    where
        P: Problem<State = S>,
        S: PartialEq,
    {
        self.0
            .windows(2)
            .all(|pair| problem.actions(&pair[0]).contains(&pair[1]))
    }
}

impl<S> From<Vec<S>> for Path<S> {
    fn from(states: Vec<S>) -> Self {
        Path(states)
    }
}

impl<S> Default for Path<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S: fmt::Display> fmt::Display for Path<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, state) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{state}")?;
        }
        Ok(())
    }
}

/// Work counters collected during one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States whose successors were generated.
    pub expanded: usize,
    /// Successor entries produced.
    pub generated: usize,
}

/// A path together with the work spent finding it.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<S> {
    pub path: Path<S>,
    pub stats: SearchStats,
}

impl<S> Solution<S> {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn into_path(self) -> Path<S> {
        self.path
    }
}

/// Outcome of a depth- or cost-bounded search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bounded<S> {
    /// A path to the goal within the bound.
    Found(Path<S>),
    /// The bound stopped at least one branch; a larger bound may succeed.
    Cutoff,
    /// Every branch ended before the bound; no solution exists.
    Exhausted,
}

impl<S> Bounded<S> {
    pub fn is_cutoff(&self) -> bool {
        matches!(self, Bounded::Cutoff)
    }

    /// Collapse to a path, empty unless found.
    pub fn into_path(self) -> Path<S> {
        match self {
            Bounded::Found(path) => path,
            Bounded::Cutoff | Bounded::Exhausted => Path::empty(),
        }
    }
}
