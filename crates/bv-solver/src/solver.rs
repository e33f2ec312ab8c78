//! Greedy nearest-pill solver.
//!
//! One BFS flood per leg computes the shortest path from the current
//! position to every reachable cell at once (edge costs are uniform, so
//! this finds the same paths A* would). The walk then repeatedly heads for
//! the nearest remaining pill until none are left.

use crate::grid::{Cell, Grid};
use std::collections::VecDeque;
use thiserror::Error;

/// Errors raised while parsing or solving a maze.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The maze text had no rows.
    #[error("maze is empty")]
    EmptyGrid,

    /// No `L` start marker anywhere in the maze.
    #[error("maze has no start position 'L'")]
    MissingStart,

    /// A character that is not `#`, `.`, `L`, or a space.
    #[error("unrecognized maze cell {0:?}")]
    UnknownCell(char),

    /// A pill walled off from the current position.
    #[error("pill at row {row}, column {col} is unreachable")]
    UnreachablePill { row: usize, col: usize },
}

/// Row/column deltas with their move letters. Rows grow downward.
const DIRECTIONS: [(isize, isize, char); 4] =
    [(-1, 0, 'U'), (1, 0, 'D'), (0, -1, 'L'), (0, 1, 'R')];

/// Solve a maze: parse it and return a move string that collects every
/// pill.
pub fn solve(maze: &str) -> Result<String, SolveError> {
    let grid = Grid::parse(maze)?;
    let mut remaining = grid.pills();
    let mut position = grid.start();
    let mut path = String::new();

    while !remaining.is_empty() {
        let flood = Flood::from(&grid, position);

        let mut nearest: Option<(u32, usize)> = None;
        for (i, &(row, col)) in remaining.iter().enumerate() {
            if let Some(d) = flood.distance(row, col) {
                if nearest.map_or(true, |(best, _)| d < best) {
                    nearest = Some((d, i));
                }
            }
        }
        let Some((_, i)) = nearest else {
            let (row, col) = remaining[0];
            return Err(SolveError::UnreachablePill { row, col });
        };

        let target = remaining.swap_remove(i);
        flood.walk_to(target, &mut path);
        position = target;
    }

    Ok(path)
}

/// One BFS flood: distance and arrival move for every reachable cell.
struct Flood {
    origin: (usize, usize),
    dist: Vec<Vec<Option<u32>>>,
    /// Move letter and predecessor cell that first reached each cell.
    came: Vec<Vec<Option<(char, usize, usize)>>>,
}

impl Flood {
    fn from(grid: &Grid, origin: (usize, usize)) -> Self {
        let (rows, cols) = (grid.rows(), grid.cols());
        let mut flood = Self {
            origin,
            dist: vec![vec![None; cols]; rows],
            came: vec![vec![None; cols]; rows],
        };
        flood.dist[origin.0][origin.1] = Some(0);

        let mut queue = VecDeque::from([origin]);
        while let Some((row, col)) = queue.pop_front() {
            let d = flood.dist[row][col].expect("queued cells have distances");
            for (dr, dc, mv) in DIRECTIONS {
                let (Some(nr), Some(nc)) = (
                    row.checked_add_signed(dr),
                    col.checked_add_signed(dc),
                ) else {
                    continue;
                };
                if nr >= rows || nc >= cols || grid.cell(nr, nc) == Cell::Wall {
                    continue;
                }
                if flood.dist[nr][nc].is_none() {
                    flood.dist[nr][nc] = Some(d + 1);
                    flood.came[nr][nc] = Some((mv, row, col));
                    queue.push_back((nr, nc));
                }
            }
        }
        flood
    }

    fn distance(&self, row: usize, col: usize) -> Option<u32> {
        self.dist[row][col]
    }

    /// Append the moves from the flood's origin to `target`.
    fn walk_to(&self, target: (usize, usize), path: &mut String) {
        let mut leg = Vec::new();
        let (mut row, mut col) = target;
        while (row, col) != self.origin {
            let (mv, pr, pc) =
                self.came[row][col].expect("walk_to targets are reachable");
            leg.push(mv);
            (row, col) = (pr, pc);
        }
        path.extend(leg.into_iter().rev());
    }
}
