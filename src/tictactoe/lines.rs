//! Three-in-a-row detection

use super::{Cell, Player};

/// Winning line indices on the 3x3 board, row-major
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Check if a player has three in a row
pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
    winning_line(cells, player).is_some()
}

/// The first completed line belonging to `player`, if any
pub fn winning_line(cells: &[Cell; 9], player: Player) -> Option<[usize; 3]> {
    let target = player.to_cell();
    WINNING_LINES
        .into_iter()
        .find(|line| line.iter().all(|&idx| cells[idx] == target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert!(has_won(&cells, Player::X));
        assert!(!has_won(&cells, Player::O));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[1] = Cell::O;
        cells[4] = Cell::O;
        cells[7] = Cell::O;

        assert!(has_won(&cells, Player::O));
        assert_eq!(winning_line(&cells, Player::O), Some([1, 4, 7]));
    }

    #[test]
    fn test_has_won_anti_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::X;
        cells[4] = Cell::X;
        cells[6] = Cell::X;

        assert_eq!(winning_line(&cells, Player::X), Some([2, 4, 6]));
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[4] = Cell::X;

        assert!(!has_won(&cells, Player::X));
        assert_eq!(winning_line(&cells, Player::X), None);
    }
}
