//! Maze parsing.

use crate::solver::SolveError;

/// One maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// `#` — impassable.
    Wall,
    /// `.` — a pill to collect.
    Pill,
    /// Open floor (including the vacated start position).
    Floor,
}

/// A parsed maze: dense row-major cells plus the start position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    start: (usize, usize),
}

impl Grid {
    /// Parse a maze from its text form. `L` marks the start and is treated
    /// as floor once located; any character other than `#`, `.`, `L`, or a
    /// space is rejected.
    pub fn parse(text: &str) -> Result<Self, SolveError> {
        let mut cells = Vec::new();
        let mut start = None;
        for (row, line) in text.lines().enumerate() {
            let mut cols = Vec::with_capacity(line.len());
            for (col, c) in line.chars().enumerate() {
                cols.push(match c {
                    '#' => Cell::Wall,
                    '.' => Cell::Pill,
                    ' ' => Cell::Floor,
                    'L' => {
                        start = Some((row, col));
                        Cell::Floor
                    }
                    other => return Err(SolveError::UnknownCell(other)),
                });
            }
            cells.push(cols);
        }
        if cells.is_empty() {
            return Err(SolveError::EmptyGrid);
        }
        let start = start.ok_or(SolveError::MissingStart)?;
        Ok(Self { cells, start })
    }

    /// Row/column of the `L` marker.
    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Cell at (row, col); out-of-range positions (including past a ragged
    /// row's end) read as walls.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(Cell::Wall)
    }

    /// Widest row; rows may be ragged.
    pub fn cols(&self) -> usize {
        self.cells.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// All pill positions in row-major order.
    pub fn pills(&self) -> Vec<(usize, usize)> {
        let mut pills = Vec::new();
        for (row, cols) in self.cells.iter().enumerate() {
            for (col, cell) in cols.iter().enumerate() {
                if *cell == Cell::Pill {
                    pills.push((row, col));
                }
            }
        }
        pills
    }
}
