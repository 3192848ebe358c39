//! Heuristic estimates for informed search.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Estimate of the remaining cost from `state` to `goal`.
///
/// Nothing here checks admissibility; A* is only optimal when the estimate
/// never exceeds the true remaining cost.
pub trait Heuristic<S> {
    fn estimate(&self, state: &S, goal: &S) -> f64;
}

impl<S, F> Heuristic<S> for F
where
    F: Fn(&S, &S) -> f64,
{
    fn estimate(&self, state: &S, goal: &S) -> f64 {
        self(state, goal)
    }
}

/// h ≡ 0. Turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<S> Heuristic<S> for ZeroHeuristic {
    fn estimate(&self, _state: &S, _goal: &S) -> f64 {
        0.0
    }
}

/// States that may sit on a plane.
pub trait Planar {
    fn coordinates(&self) -> Option<(f64, f64)>;
}

impl Planar for (i32, i32) {
    fn coordinates(&self) -> Option<(f64, f64)> {
        Some((f64::from(self.0), f64::from(self.1)))
    }
}

impl Planar for str {
    /// Labels of the form `3,4` or `(3, 4)` name a point.
    fn coordinates(&self) -> Option<(f64, f64)> {
        let inner = self
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        let (x, y) = inner.split_once(',')?;
        Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
    }
}

impl Planar for String {
    fn coordinates(&self) -> Option<(f64, f64)> {
        self.as_str().coordinates()
    }
}

impl<T: Planar + ?Sized> Planar for &T {
    fn coordinates(&self) -> Option<(f64, f64)> {
        (**self).coordinates()
    }
}

/// The heuristics a front end can pick by name.
///
/// When either state has no coordinates every variant falls back to the
/// 0/1 is-goal estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamedHeuristic {
    #[default]
    Manhattan,
    Euclidean,
    Chebyshev,
    IsGoal,
}

impl NamedHeuristic {
    pub const ALL: [NamedHeuristic; 4] = [
        NamedHeuristic::Manhattan,
        NamedHeuristic::Euclidean,
        NamedHeuristic::Chebyshev,
        NamedHeuristic::IsGoal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NamedHeuristic::Manhattan => "manhattan",
            NamedHeuristic::Euclidean => "euclidean",
            NamedHeuristic::Chebyshev => "chebyshev",
            NamedHeuristic::IsGoal => "is-goal",
        }
    }

    fn distance(self, (x1, y1): (f64, f64), (x2, y2): (f64, f64)) -> f64 {
        let dx = (x1 - x2).abs();
        let dy = (y1 - y2).abs();
        match self {
            NamedHeuristic::Manhattan => dx + dy,
            NamedHeuristic::Euclidean => dx.hypot(dy),
            NamedHeuristic::Chebyshev => dx.max(dy),
            NamedHeuristic::IsGoal => {
                if dx == 0.0 && dy == 0.0 {
                    0.0
                } else {
                    1.0
                }
            }
        }
    }
}

impl<S: Planar + PartialEq> Heuristic<S> for NamedHeuristic {
    fn estimate(&self, state: &S, goal: &S) -> f64 {
        match (state.coordinates(), goal.coordinates()) {
            (Some(from), Some(to)) => self.distance(from, to),
            _ if state == goal => 0.0,
            _ => 1.0,
        }
    }
}

impl fmt::Display for NamedHeuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamedHeuristic {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|h| h.as_str() == normalised)
            .ok_or_else(|| crate::Error::UnknownHeuristic {
                input: s.to_string(),
                expected: Self::ALL.map(NamedHeuristic::as_str).join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances_on_grid_states() {
        let from = (0, 0);
        let to = (3, 4);
        assert_eq!(NamedHeuristic::Manhattan.estimate(&from, &to), 7.0);
        assert_eq!(NamedHeuristic::Euclidean.estimate(&from, &to), 5.0);
        assert_eq!(NamedHeuristic::Chebyshev.estimate(&from, &to), 4.0);
        assert_eq!(NamedHeuristic::IsGoal.estimate(&from, &to), 1.0);
        assert_eq!(NamedHeuristic::IsGoal.estimate(&to, &to), 0.0);
    }

    #[test]
    fn coordinate_labels_parse() {
        assert_eq!("(3, 4)".coordinates(), Some((3.0, 4.0)));
        assert_eq!("1,2".coordinates(), Some((1.0, 2.0)));
        assert_eq!("A".coordinates(), None);
        let from = "(0,0)".to_string();
        let to = "(1,1)".to_string();
        assert_eq!(NamedHeuristic::Manhattan.estimate(&from, &to), 2.0);
    }

    #[test]
    fn plain_labels_fall_back_to_is_goal() {
        let a = "A".to_string();
        let b = "B".to_string();
        for heuristic in NamedHeuristic::ALL {
            assert_eq!(heuristic.estimate(&a, &b), 1.0);
            assert_eq!(heuristic.estimate(&a, &a), 0.0);
        }
    }

    #[test]
    fn parses_names() {
        assert_eq!("Manhattan".parse::<NamedHeuristic>().unwrap(), NamedHeuristic::Manhattan);
        assert_eq!("is_goal".parse::<NamedHeuristic>().unwrap(), NamedHeuristic::IsGoal);
        let err = "taxicab".parse::<NamedHeuristic>().unwrap_err();
        assert!(err.to_string().contains("manhattan, euclidean"));
    }

    #[test]
    fn closures_are_heuristics() {
        let h = |s: &i32, g: &i32| f64::from((g - s).abs());
        assert_eq!(h.estimate(&2, &5), 3.0);
        assert_eq!(ZeroHeuristic.estimate(&2, &5), 0.0);
    }
}
