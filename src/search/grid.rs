//! Four-connected mazes whose states are `(row, col)` coordinates.

use super::problem::Problem;

/// Grid coordinate.
pub type Cell = (i32, i32);

/// Step order used for successors: up, down, left, right.
const STEPS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A rectangular maze read from text.
///
/// `.` is open, `#` is a wall, `S` and `G` mark the start and goal (both
/// open). Every step costs 1.
#[derive(Debug, Clone)]
pub struct GridProblem {
    open: Vec<Vec<bool>>,
    start: Cell,
    goal: Cell,
}

impl GridProblem {
    /// Parse a maze.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GraphSyntax`] for unknown characters, ragged
    /// rows or a repeated `S`/`G`, and [`crate::Error::MissingMarker`] when
    /// either marker is absent. Line numbers count blank lines too.
    pub fn parse(text: &str) -> Result<Self, crate::Error> {
        let mut open: Vec<Vec<bool>> = Vec::new();
        let mut start = None;
        let mut goal = None;

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let syntax = |message: String| crate::Error::GraphSyntax {
                line: index + 1,
                message,
            };
            let row = open.len() as i32;
            let mut cells = Vec::with_capacity(line.len());
            for (col, c) in line.chars().enumerate() {
                let here = (row, col as i32);
                match c {
                    '.' => cells.push(true),
                    '#' => cells.push(false),
                    'S' if start.is_none() => {
                        start = Some(here);
                        cells.push(true);
                    }
                    'G' if goal.is_none() => {
                        goal = Some(here);
                        cells.push(true);
                    }
                    'S' | 'G' => return Err(syntax(format!("second '{c}' marker"))),
                    other => return Err(syntax(format!("unexpected character '{other}'"))),
                }
            }
            if let Some(first) = open.first().map(Vec::len) {
                if cells.len() != first {
                    return Err(syntax(format!(
                        "row has {} cells, expected {first}",
                        cells.len()
                    )));
                }
            }
            open.push(cells);
        }

        let missing = |marker: char| crate::Error::MissingMarker { marker };
        Ok(Self {
            start: start.ok_or_else(|| missing('S'))?,
            goal: goal.ok_or_else(|| missing('G'))?,
            open,
        })
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn rows(&self) -> usize {
        self.open.len()
    }

    pub fn cols(&self) -> usize {
        self.open.first().map_or(0, Vec::len)
    }

    pub fn is_open(&self, (row, col): Cell) -> bool {
        usize::try_from(row)
            .ok()
            .zip(usize::try_from(col).ok())
            .and_then(|(r, c)| self.open.get(r)?.get(c).copied())
            .unwrap_or(false)
    }
}

impl Problem for GridProblem {
    type State = Cell;

    fn actions(&self, &(row, col): &Cell) -> Vec<Cell> {
        if !self.is_open((row, col)) {
            return Vec::new();
        }
        STEPS
            .iter()
            .map(|(dr, dc)| (row + dr, col + dc))
            .filter(|&next| self.is_open(next))
            .collect()
    }
}
