//! Tic-Tac-Toe with minimax and alpha-beta game-tree search

pub mod board;
pub mod game_tree;
pub mod lines;
pub mod session;

pub use board::{Board, Cell, MoveGuard, Player, Square};
pub use game_tree::{Decision, Strategy, TreeStats, alpha_beta, best_move, minimax, utility};
pub use lines::WINNING_LINES;
pub use session::{Difficulty, GameOutcome, Session, selfplay};
