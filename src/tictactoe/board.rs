//! Board representation and in-place move application

use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use serde::{Deserialize, Serialize};

use super::lines;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A (row, column) position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    /// Every square in row-major order, the order search enumerates moves in
    pub const ALL: [Square; 9] = [
        Square { row: 0, col: 0 },
        Square { row: 0, col: 1 },
        Square { row: 0, col: 2 },
        Square { row: 1, col: 0 },
        Square { row: 1, col: 1 },
        Square { row: 1, col: 2 },
        Square { row: 2, col: 0 },
        Square { row: 2, col: 1 },
        Square { row: 2, col: 2 },
    ];

    /// Create a square, rejecting rows or columns outside 0-2.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row < 3 && col < 3 {
            Ok(Square { row, col })
        } else {
            Err(crate::Error::InvalidSquare { row, col })
        }
    }

    /// Row-major index (0-8)
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 3x3 grid.
///
/// Owned by one game session; search mutates it in place through
/// [`Board::trial`] and every trial move is undone before the search returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace is ignored; the remaining 9 characters are read row-major
    /// with `.` for empty cells.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string does not hold exactly 9 cells
    /// - Any character is not a valid cell representation
    /// - The piece counts differ by more than one
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let board = Board { cells };
        let (x, o) = board.counts();
        if x.abs_diff(o) > 1 {
            return Err(crate::Error::InvalidConfiguration {
                message: format!("piece counts must differ by at most 1 (X={x}, O={o}) in '{s}'"),
            });
        }
        Ok(board)
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Get the cell at a square
    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.index()]
    }

    /// Check if a square is empty
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square) == Cell::Empty
    }

    /// Number of X and O pieces on the board
    pub fn counts(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(x, o), cell| match cell {
            Cell::X => (x + 1, o),
            Cell::O => (x, o + 1),
            Cell::Empty => (x, o),
        })
    }

    /// Whose turn it is, inferred from the piece counts. X opens.
    pub fn next_player(&self) -> Player {
        let (x, o) = self.counts();
        if x > o { Player::O } else { Player::X }
    }

    /// Empty squares in row-major order
    pub fn empty_squares(&self) -> Vec<Square> {
        Square::ALL
            .into_iter()
            .filter(|&square| self.is_empty(square))
            .collect()
    }

    /// Place a piece permanently.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if the square is occupied.
    pub fn place(&mut self, square: Square, player: Player) -> Result<(), crate::Error> {
        if !self.is_empty(square) {
            return Err(crate::Error::InvalidMove {
                row: square.row,
                col: square.col,
            });
        }
        self.cells[square.index()] = player.to_cell();
        Ok(())
    }

    /// Place a piece for the lifetime of the returned guard.
    ///
    /// The square is emptied again when the guard drops, on every exit path.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if the square is occupied.
    pub fn trial(&mut self, square: Square, player: Player) -> Result<MoveGuard<'_>, crate::Error> {
        self.place(square, player)?;
        Ok(MoveGuard {
            board: self,
            square,
        })
    }

    /// Empty every cell
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Check if a player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        lines::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the game is over (three in a row, or a full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// A trial move on a borrowed board, undone on drop.
///
/// Dereferences to the board so recursive search can keep exploring the
/// position with the move applied.
#[derive(Debug)]
pub struct MoveGuard<'a> {
    board: &'a mut Board,
    square: Square,
}

impl MoveGuard<'_> {
    pub fn square(&self) -> Square {
        self.square
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.cells[self.square.index()] = Cell::Empty;
    }
}
