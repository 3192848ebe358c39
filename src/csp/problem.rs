//! Constraint problems read from text and solved by backtracking

use std::{fmt, str::FromStr};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::relation::Relation;

/// A domain value. Tokens that parse as integers compare numerically;
/// everything else compares as text, after all integers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Value {
    Int(i64),
    Text(String),
}

impl FromStr for Value {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<i64>()
            .map(Value::Int)
            .unwrap_or_else(|_| Value::Text(s.to_string())))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// `left <relation> right` over two variable indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub left: usize,
    pub relation: Relation,
    pub right: usize,
}

/// Variables with finite domains and binary constraints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CspProblem {
    variables: Vec<String>,
    domains: Vec<Vec<Value>>,
    constraints: Vec<Constraint>,
}

/// A complete assignment, in variable declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment(pub Vec<(String, Value)>);

impl Assignment {
    pub fn get(&self, variable: &str) -> Option<&Value> {
        self.0.iter().find(|(name, _)| name == variable).map(|(_, v)| v)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl CspProblem {
    /// Build a problem from the three text blocks a front end collects.
    ///
    /// - `variables`: names separated by whitespace
    /// - `domains`: one line per variable, values separated by whitespace
    /// - `constraints`: one per line, `A op B` or `A is op B`
    ///
    /// # Errors
    ///
    /// Returns error if a variable has no domain line, a constraint line has
    /// the wrong shape, names an unknown variable or uses an unknown operator.
    pub fn parse(variables: &str, domains: &str, constraints: &str) -> Result<Self, crate::Error> {
        let mut problem = Self::default();
        let mut domain_lines = domains.lines();

        for name in variables.split_whitespace() {
            let domain = domain_lines
                .next()
                .ok_or_else(|| crate::Error::MissingDomain {
                    variable: name.to_string(),
                })?;
            problem.add_variable(
                name,
                domain
                    .split_whitespace()
                    .filter_map(|token| token.parse().ok())
                    .collect(),
            );
        }

        for (index, line) in constraints.lines().enumerate() {
            let line_no = index + 1;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let (left, op, right) = match tokens.as_slice() {
                [] => continue,
                [left, op, right] | [left, _, op, right] => (*left, *op, *right),
                _ => {
                    return Err(crate::Error::CspSyntax {
                        line: line_no,
                        text: line.to_string(),
                    });
                }
            };
            let relation: Relation = op.parse()?;
            let lookup = |name: &str| {
                problem
                    .index_of(name)
                    .ok_or_else(|| crate::Error::UnknownVariable {
                        line: line_no,
                        variable: name.to_string(),
                    })
            };
            let constraint = Constraint {
                left: lookup(left)?,
                relation,
                right: lookup(right)?,
            };
            problem.constraints.push(constraint);
        }

        Ok(problem)
    }

    /// Declare a variable; redeclaring one replaces its domain
    pub fn add_variable(&mut self, name: &str, domain: Vec<Value>) {
        match self.index_of(name) {
            Some(index) => self.domains[index] = domain,
            None => {
                self.variables.push(name.to_string());
                self.domains.push(domain);
            }
        }
    }

    /// Add `left <relation> right`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownVariable`] if either side is undeclared.
    pub fn add_constraint(
        &mut self,
        left: &str,
        relation: Relation,
        right: &str,
    ) -> Result<(), crate::Error> {
        let lookup = |name: &str| {
            self.index_of(name).ok_or_else(|| crate::Error::UnknownVariable {
                line: 0,
                variable: name.to_string(),
            })
        };
        let constraint = Constraint {
            left: lookup(left)?,
            relation,
            right: lookup(right)?,
        };
        self.constraints.push(constraint);
        Ok(())
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.variables.iter().position(|v| v == name)
    }

    /// First solution found by chronological backtracking, trying variables
    /// in declaration order and values in domain order.
    pub fn solve(&self) -> Option<Assignment> {
        let mut values: Vec<Option<&Value>> = vec![None; self.variables.len()];
        let mut checks = 0usize;
        let solved = self.backtrack(0, &mut values, &mut checks);
        debug!(
            "csp with {} variables and {} constraints: {} after {checks} checks",
            self.variables.len(),
            self.constraints.len(),
            if solved { "solved" } else { "no solution" }
        );
        if !solved {
            return None;
        }
        let pairs = self
            .variables
            .iter()
            .zip(values)
            .map(|(name, value)| Some((name.clone(), value?.clone())))
            .collect::<Option<Vec<_>>>()?;
        Some(Assignment(pairs))
    }

    fn backtrack<'a>(
        &'a self,
        index: usize,
        values: &mut [Option<&'a Value>],
        checks: &mut usize,
    ) -> bool {
        if index == self.variables.len() {
            return true;
        }
        for value in &self.domains[index] {
            values[index] = Some(value);
            if self.consistent(index, values, checks) && self.backtrack(index + 1, values, checks) {
                return true;
            }
        }
        trace!("backtracking from {}", self.variables[index]);
        values[index] = None;
        false
    }

    /// Check every constraint whose variables are all assigned and which
    /// involves `index`.
    fn consistent(&self, index: usize, values: &[Option<&Value>], checks: &mut usize) -> bool {
        self.constraints
            .iter()
            .filter(|c| c.left == index || c.right == index)
            .all(|c| match (values[c.left], values[c.right]) {
                (Some(left), Some(right)) => {
                    *checks += 1;
                    c.relation.holds(left, right)
                }
                _ => true,
            })
    }
}
