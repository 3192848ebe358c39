//! Classical AI search toolkit
//!
//! This crate provides:
//! - Uninformed, informed and local graph search over any [`search::Problem`]
//! - Text-defined weighted graphs and grid mazes to search over
//! - Tic-Tac-Toe with minimax and alpha-beta game-tree search
//! - A small finite-domain constraint solver
//! - The command-line front end behind the `s2p` binary

pub mod cli;
pub mod csp;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
