//! Binary relational operators used in constraints

use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A comparison between two values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    Equal,
    NotEqual,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
}

impl Relation {
    pub const ALL: [Relation; 6] = [
        Relation::Equal,
        Relation::NotEqual,
        Relation::LessThan,
        Relation::LessOrEqual,
        Relation::GreaterThan,
        Relation::GreaterOrEqual,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Equal => "==",
            Relation::NotEqual => "!=",
            Relation::LessThan => "<",
            Relation::LessOrEqual => "<=",
            Relation::GreaterThan => ">",
            Relation::GreaterOrEqual => ">=",
        }
    }

    /// Evaluate `left <op> right`
    pub fn holds<T: Ord + ?Sized>(self, left: &T, right: &T) -> bool {
        let ordering = left.cmp(right);
        match self {
            Relation::Equal => ordering == Ordering::Equal,
            Relation::NotEqual => ordering != Ordering::Equal,
            Relation::LessThan => ordering == Ordering::Less,
            Relation::LessOrEqual => ordering != Ordering::Greater,
            Relation::GreaterThan => ordering == Ordering::Greater,
            Relation::GreaterOrEqual => ordering != Ordering::Less,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Relation {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.symbol() == s.trim())
            .ok_or_else(|| crate::Error::UnknownRelation {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_parse() {
        for relation in Relation::ALL {
            assert_eq!(relation.symbol().parse::<Relation>().unwrap(), relation);
        }
        assert!("=<".parse::<Relation>().is_err());
    }

    #[test]
    fn holds_on_integers() {
        assert!(Relation::Equal.holds(&2, &2));
        assert!(Relation::NotEqual.holds(&2, &3));
        assert!(Relation::LessThan.holds(&2, &3));
        assert!(!Relation::LessThan.holds(&3, &3));
        assert!(Relation::LessOrEqual.holds(&3, &3));
        assert!(Relation::GreaterThan.holds(&4, &3));
        assert!(Relation::GreaterOrEqual.holds(&3, &3));
        assert!(!Relation::GreaterOrEqual.holds(&2, &3));
    }
}
