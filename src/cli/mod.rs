//! CLI infrastructure for the s2p toolkit
//!
//! This module provides the command-line interface for graph search,
//! Tic-Tac-Toe play and analysis, and constraint solving.

pub mod commands;
pub mod config;
pub mod output;

use clap::ValueEnum;

use crate::tictactoe::Player;

/// A side on the command line (`x` or `o`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    X,
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}
