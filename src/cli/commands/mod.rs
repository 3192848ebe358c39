//! Subcommands of the `s2p` binary

pub mod csp;
pub mod game;
pub mod search;
