//! Finite-domain constraint satisfaction over binary relations

pub mod problem;
pub mod relation;

pub use problem::{Assignment, Constraint, CspProblem, Value};
pub use relation::Relation;
