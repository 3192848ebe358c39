//! A single human-versus-machine game with its own board

use std::{fmt, str::FromStr};

use log::debug;
use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};
use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Player, Square},
    game_tree::{Strategy, best_move},
};

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of `board`, or `None` while moves remain
    pub fn of(board: &Board) -> Option<Self> {
        match board.winner() {
            Some(winner) => Some(GameOutcome::Win(winner)),
            None if board.is_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(player) => write!(f, "{player} wins"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// How the machine picks its moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random legal move
    Easy,
    /// Full minimax
    Medium,
    /// Alpha-beta pruning
    #[default]
    Hard,
}

impl Difficulty {
    /// The game-tree search behind this level, if any
    pub fn strategy(self) -> Option<Strategy> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(Strategy::Minimax),
            Difficulty::Hard => Some(Strategy::AlphaBeta),
        }
    }
}

impl FromStr for Difficulty {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(crate::Error::InvalidConfiguration {
                message: format!("unknown difficulty '{s}' (expected easy, medium or hard)"),
            }),
        }
    }
}

/// One game between a human and the machine.
///
/// Each session owns its board; nothing is shared between sessions. X always
/// opens.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    human: Player,
    to_move: Player,
    difficulty: Difficulty,
    rng: StdRng,
}

impl Session {
    /// Start a game with an unseeded random source
    pub fn new(human: Player, difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            human,
            to_move: Player::X,
            difficulty,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seed the random source used by [`Difficulty::Easy`]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn machine(&self) -> Player {
        self.human.opponent()
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Result so far; `None` while the game is in progress
    pub fn outcome(&self) -> Option<GameOutcome> {
        GameOutcome::of(&self.board)
    }

    /// Apply the human's move.
    ///
    /// # Errors
    ///
    /// [`crate::Error::GameOver`] once the game has ended,
    /// [`crate::Error::NotYourTurn`] when the machine is to move and
    /// [`crate::Error::InvalidMove`] for an occupied square.
    pub fn play_human(&mut self, square: Square) -> Result<(), crate::Error> {
        self.play(self.human, square)
    }

    /// Let the machine choose and apply its move.
    ///
    /// # Errors
    ///
    /// [`crate::Error::GameOver`] once the game has ended and
    /// [`crate::Error::NotYourTurn`] when the human is to move.
    pub fn play_machine(&mut self) -> Result<Square, crate::Error> {
        let machine = self.machine();
        self.ensure_turn(machine)?;

        let square = match self.difficulty.strategy() {
            Some(strategy) => best_move(&mut self.board, machine, strategy).map(|d| d.square),
            None => self.board.empty_squares().choose(&mut self.rng).copied(),
        }
        .ok_or(crate::Error::GameOver)?;

        debug!("{machine} ({:?}) plays {square}", self.difficulty);
        self.play(machine, square)?;
        Ok(square)
    }

    /// Clear the board for a new game
    pub fn reset(&mut self) {
        self.board.reset();
        self.to_move = Player::X;
    }

    fn ensure_turn(&self, player: Player) -> Result<(), crate::Error> {
        if self.outcome().is_some() {
            return Err(crate::Error::GameOver);
        }
        if self.to_move != player {
            return Err(crate::Error::NotYourTurn {
                expected: self.to_move,
                got: player,
            });
        }
        Ok(())
    }

    fn play(&mut self, player: Player, square: Square) -> Result<(), crate::Error> {
        self.ensure_turn(player)?;
        self.board.place(square, player)?;
        self.to_move = player.opponent();
        Ok(())
    }
}

/// Play a whole game with `strategy` choosing every move for both sides.
///
/// Returns the final board and its outcome.
///
/// # Errors
///
/// Fails if the search picks a move the board rejects, or finds no move on a
/// position that is not over.
pub fn selfplay(strategy: Strategy) -> Result<(Board, GameOutcome), crate::Error> {
    let mut board = Board::new();
    let mut mover = Player::X;
    loop {
        if let Some(outcome) = GameOutcome::of(&board) {
            return Ok((board, outcome));
        }
        let decision = best_move(&mut board, mover, strategy).ok_or(crate::Error::GameOver)?;
        board.place(decision.square, mover)?;
        mover = mover.opponent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn turns_alternate_and_are_enforced() {
        let mut session = Session::new(Player::X, Difficulty::Hard);
        assert!(matches!(session.play_machine(), Err(crate::Error::NotYourTurn { .. })));

        session.play_human(sq(1, 1)).unwrap();
        assert_eq!(session.to_move(), Player::O);
        assert!(matches!(
            session.play_human(sq(0, 0)),
            Err(crate::Error::NotYourTurn { .. })
        ));

        let reply = session.play_machine().unwrap();
        assert_eq!(session.board().get(reply), crate::tictactoe::Cell::O);
        assert!(matches!(
            session.play_human(reply),
            Err(crate::Error::InvalidMove { .. })
        ));
    }

    #[test]
    fn machine_can_open_when_human_plays_o() {
        let mut session = Session::new(Player::O, Difficulty::Medium);
        let opening = session.play_machine().unwrap();
        assert_eq!(session.board().get(opening), crate::tictactoe::Cell::X);
        assert_eq!(session.to_move(), Player::O);
    }

    #[test]
    fn hard_machine_never_loses_to_a_naive_human() {
        let mut session = Session::new(Player::X, Difficulty::Hard);
        while session.outcome().is_none() {
            if session.to_move() == session.human() {
                let first_free = session.board().empty_squares()[0];
                session.play_human(first_free).unwrap();
            } else {
                session.play_machine().unwrap();
            }
        }
        assert_ne!(session.outcome(), Some(GameOutcome::Win(Player::X)));
        assert!(matches!(session.play_human(sq(0, 0)), Err(crate::Error::GameOver)));
    }

    #[test]
    fn easy_machine_is_reproducible_with_a_seed() {
        let play = || {
            let mut session = Session::new(Player::O, Difficulty::Easy).with_seed(7);
            session.play_machine().unwrap()
        };
        assert_eq!(play(), play());
    }

    #[test]
    fn reset_starts_over() {
        let mut session = Session::new(Player::X, Difficulty::Easy).with_seed(1);
        session.play_human(sq(0, 0)).unwrap();
        session.play_machine().unwrap();
        session.reset();
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.to_move(), Player::X);
    }

    #[test]
    fn perfect_selfplay_is_a_draw() {
        let (board, outcome) = selfplay(Strategy::AlphaBeta).unwrap();
        assert_eq!(outcome, GameOutcome::Draw);
        assert!(board.is_full());
        assert_eq!(GameOutcome::of(&board), Some(outcome));
    }

    #[test]
    fn difficulty_parses() {
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("impossible".parse::<Difficulty>().is_err());
    }
}
