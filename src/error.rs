//! Error types for the s2p crate

use thiserror::Error;

/// Main error type for the s2p crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: square ({row}, {col}) is already occupied")]
    InvalidMove { row: usize, col: usize },

    #[error("square ({row}, {col}) is out of bounds (row and column must be 0-2)")]
    InvalidSquare { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("it is {expected:?}'s turn, not {got:?}'s")]
    NotYourTurn {
        expected: crate::tictactoe::Player,
        got: crate::tictactoe::Player,
    },

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("graph syntax error on line {line}: {message}")]
    GraphSyntax { line: usize, message: String },

    #[error("invalid cost '{value}' on line {line} (must be a finite, non-negative number)")]
    InvalidCost { line: usize, value: String },

    #[error("maze has no '{marker}' marker")]
    MissingMarker { marker: char },

    #[error("unknown node '{node}'")]
    UnknownNode { node: String },

    #[error("unknown heuristic '{input}'. Expected one of: {expected}")]
    UnknownHeuristic { input: String, expected: String },

    #[error("unknown algorithm '{input}'. Expected one of: {expected}")]
    UnknownAlgorithm { input: String, expected: String },

    #[error("unknown relation '{input}'. Expected one of: ==, !=, <, <=, >, >=")]
    UnknownRelation { input: String },

    #[error("constraint syntax error on line {line}: '{text}'")]
    CspSyntax { line: usize, text: String },

    #[error("constraint on line {line} references unknown variable '{variable}'")]
    UnknownVariable { line: usize, variable: String },

    #[error("variable '{variable}' has no domain line")]
    MissingDomain { variable: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
