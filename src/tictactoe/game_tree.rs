//! Adversarial game-tree search: minimax and alpha-beta pruning
//!
//! The machine is always the maximizing player and its opponent the
//! minimizing one. Both searches walk the same tree, trying every empty
//! square in row-major order with a scoped trial move, so the board is back
//! in its original state when they return.

use std::{fmt, str::FromStr};

use log::debug;
use serde::{Deserialize, Serialize};

use super::board::{Board, Player, Square};

/// Work done by one game-tree search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Positions visited, terminal or not
    pub nodes: u64,
    /// Terminal positions scored
    pub terminals: u64,
}

/// Which game-tree search drives a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    Minimax,
    #[default]
    AlphaBeta,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alpha-beta",
        })
    }
}

impl FromStr for Strategy {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "minimax" => Ok(Strategy::Minimax),
            "alpha-beta" | "alphabeta" => Ok(Strategy::AlphaBeta),
            _ => Err(crate::Error::UnknownAlgorithm {
                input: s.to_string(),
                expected: "minimax, alpha-beta".to_string(),
            }),
        }
    }
}

/// The move chosen for the machine, with its minimax value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub square: Square,
    pub utility: i32,
    pub stats: TreeStats,
}

/// Score a terminal position from the machine's point of view.
///
/// +1 if the machine has three in a row, -1 if its opponent does, 0 for a
/// full board without a line, `None` while the game is still open.
pub fn utility(board: &Board, machine: Player) -> Option<i32> {
    match board.winner() {
        Some(winner) if winner == machine => Some(1),
        Some(_) => Some(-1),
        None if board.is_full() => Some(0),
        None => None,
    }
}

/// Plain minimax over every continuation of `board`.
pub fn minimax(board: &mut Board, machine: Player, maximizing: bool, stats: &mut TreeStats) -> i32 {
    stats.nodes += 1;
    if let Some(score) = utility(board, machine) {
        stats.terminals += 1;
        return score;
    }

    let mover = if maximizing { machine } else { machine.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for square in board.empty_squares() {
        let Ok(mut trial) = board.trial(square, mover) else {
            continue;
        };
        let score = minimax(&mut trial, machine, !maximizing, stats);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

/// Minimax with alpha-beta pruning.
///
/// Siblings at a ply are skipped once `alpha >= beta`; the value returned
/// for a full `(i32::MIN, i32::MAX)` window equals [`minimax`]'s.
pub fn alpha_beta(
    board: &mut Board,
    machine: Player,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    stats: &mut TreeStats,
) -> i32 {
    stats.nodes += 1;
    if let Some(score) = utility(board, machine) {
        stats.terminals += 1;
        return score;
    }

    let mover = if maximizing { machine } else { machine.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for square in board.empty_squares() {
        let Ok(mut trial) = board.trial(square, mover) else {
            continue;
        };
        let score = alpha_beta(&mut trial, machine, alpha, beta, !maximizing, stats);
        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if alpha >= beta {
            break;
        }
    }
    best
}

/// Pick the machine's move.
///
/// Every empty square is tried in row-major order and the resulting position
/// is scored with the opponent to move. The highest utility wins; the first
/// square reaching it breaks ties. Returns `None` if the game is already over.
/// The board is unchanged on return.
pub fn best_move(board: &mut Board, machine: Player, strategy: Strategy) -> Option<Decision> {
    if board.is_terminal() {
        return None;
    }

    let mut stats = TreeStats::default();
    let mut best: Option<(Square, i32)> = None;
    for square in board.empty_squares() {
        let Ok(mut trial) = board.trial(square, machine) else {
            continue;
        };
        let score = match strategy {
            Strategy::Minimax => minimax(&mut trial, machine, false, &mut stats),
            Strategy::AlphaBeta => {
                alpha_beta(&mut trial, machine, i32::MIN, i32::MAX, false, &mut stats)
            }
        };
        if best.is_none_or(|(_, value)| score > value) {
            best = Some((square, score));
        }
    }

    let (square, utility) = best?;
    debug!(
        "{strategy} picks {square} for {machine} (utility {utility}, {} nodes, {} terminals)",
        stats.nodes, stats.terminals
    );
    Some(Decision {
        square,
        utility,
        stats,
    })
}
