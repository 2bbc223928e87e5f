//! Generate a perfect maze, then walk it or let the solver find the way out
//!
//! A maze is carved with a randomized recursive backtracker, so there is
//! exactly one path between any two open cells. It can then be solved
//! automatically with a depth-first search, or navigated step by step
//! through [`navigator::Navigator`].
//!
//! # Examples
//! ```
//! use maze_walk::Maze;
//!
//! let mut maze = Maze::new(9, 9, Some(42)).unwrap();
//! println!("{maze}");
//!
//! // The carved region is a spanning tree, so the exit is always reachable.
//! assert!(maze.solve(1, 1));
//! println!("{maze}");
//! ```

use std::fmt;

use anyhow::{anyhow, bail};
use itertools::Itertools;
use rand::Rng;

use crate::generator::MazeGenerator;

pub mod generator;
pub mod navigator;

/// Cardinal direction offsets in solver order: up, down, left, right.
const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// State of a single grid cell.
///
/// `x` is the row index and `y` the column index throughout the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Solid wall, including the permanent outer border
    Wall,
    /// Open corridor, not yet explored by the solver
    Path,
    /// The start anchor, doubling as the player's current position
    Start,
    /// The goal
    End,
    /// Explored by the solver; marks left after a successful solve form
    /// the solution trail
    Visited,
}

impl Cell {
    /// Character used when rendering this cell.
    pub fn as_char(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Path => ' ',
            Cell::Start => 'S',
            Cell::End => 'E',
            Cell::Visited => '.',
        }
    }

    /// Inverse of [`Self::as_char`]; `None` for unknown symbols.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Cell::Wall),
            ' ' => Some(Cell::Path),
            'S' => Some(Cell::Start),
            'E' => Some(Cell::End),
            '.' => Some(Cell::Visited),
            _ => None,
        }
    }
}

/// A rectangular maze grid with fixed dimensions.
///
/// The grid is owned by the maze for its whole lifetime; the solver and the
/// navigator borrow it mutably, one at a time. The border is always
/// [`Cell::Wall`] and is never carved or entered.
pub struct Maze {
    rows: usize,
    cols: usize,
    grid: Vec<Vec<Cell>>,
}

impl Maze {
    /// Generate a new maze of `rows × cols` cells.
    ///
    /// Both dimensions must be odd and at least 3, so that the carving
    /// lattice lands on the start cell `(1, 1)` and the end cell
    /// `(rows - 2, cols - 2)`. With a 3×3 grid the two anchors coincide
    /// and the end marker wins.
    ///
    /// Passing `seed` makes generation reproducible; with `None` the
    /// generator is seeded from system entropy.
    pub fn new(rows: usize, cols: usize, seed: Option<u64>) -> anyhow::Result<Self> {
        Self::check_dims(rows, cols)?;
        let grid = MazeGenerator::new(seed).generate(rows, cols);
        Ok(Maze { rows, cols, grid })
    }

    /// Generate a maze using a caller-supplied random source.
    pub fn with_rng<R: Rng>(rows: usize, cols: usize, rng: R) -> anyhow::Result<Self> {
        Self::check_dims(rows, cols)?;
        let grid = MazeGenerator::with_rng(rng).generate(rows, cols);
        Ok(Maze { rows, cols, grid })
    }

    fn check_dims(rows: usize, cols: usize) -> anyhow::Result<()> {
        if rows < 3 || cols < 3 {
            bail!("maze dimensions must be at least 3x3, got {rows}x{cols}");
        }
        if rows % 2 == 0 || cols % 2 == 0 {
            bail!("maze dimensions must be odd, got {rows}x{cols}");
        }
        Ok(())
    }

    /// Parse a maze from its rendered form.
    ///
    /// Expects one line per row using the symbols of [`Cell::as_char`],
    /// rectangular and at least 3×3, with exactly one `S` and one `E`.
    ///
    /// # Examples
    /// ```
    /// use maze_walk::Maze;
    ///
    /// let layout = "#####\n#S  #\n# # #\n# #E#\n#####";
    /// let mut maze = Maze::parse(layout).unwrap();
    /// assert!(maze.solve(1, 1));
    /// ```
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let grid: Vec<Vec<Cell>> = text
            .lines()
            .enumerate()
            .map(|(x, line)| {
                line.chars()
                    .enumerate()
                    .map(|(y, c)| {
                        Cell::from_char(c)
                            .ok_or_else(|| anyhow!("unexpected character `{c}` at x={x}, y={y}"))
                    })
                    .collect()
            })
            .collect::<anyhow::Result<_>>()?;

        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        if rows < 3 || cols < 3 {
            bail!("maze layout must be at least 3x3, got {rows}x{cols}");
        }
        if let Some(bad) = grid.iter().find(|row| row.len() != cols) {
            bail!(
                "maze layout must be rectangular: expected {cols} columns, found a row with {}",
                bad.len()
            );
        }
        for (cell, name) in [(Cell::Start, "start"), (Cell::End, "end")] {
            let count = grid.iter().flatten().filter(|&&c| c == cell).count();
            if count != 1 {
                bail!("maze layout must contain exactly one {name} cell, found {count}");
            }
        }
        Ok(Maze { rows, cols, grid })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `(x, y)` lies strictly inside the border walls.
    pub fn is_interior(&self, x: usize, y: usize) -> bool {
        x > 0 && x < self.rows - 1 && y > 0 && y < self.cols - 1
    }

    /// Cell state at `(x, y)`. Panics when out of range.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.grid[x][y]
    }

    /// Overwrite the cell at `(x, y)`. Panics when out of range.
    ///
    /// Callers must keep the border walls intact; rendering and movement
    /// both assume a closed frame.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.grid[x][y] = cell;
    }

    /// Search for the end cell with a depth-first walk from `(x, y)`.
    ///
    /// Cells along the successful path are left marked [`Cell::Visited`]
    /// and render as the solution trail; dead branches are restored to
    /// [`Cell::Path`] while backtracking. Returns `false` when the end is
    /// unreachable, or when the starting cell is not an open cell.
    ///
    /// Neighbors are tried in fixed up, down, left, right order, which
    /// makes the discovered trail deterministic for a given maze.
    pub fn solve(&mut self, x: usize, y: usize) -> bool {
        if !self.is_interior(x, y) {
            return false;
        }
        match self.grid[x][y] {
            Cell::End => return true,
            Cell::Path | Cell::Start => {}
            Cell::Wall | Cell::Visited => return false,
        }

        self.grid[x][y] = Cell::Visited;
        for (dx, dy) in DIRECTIONS {
            let nx = (x as i32 + dx) as usize;
            let ny = (y as i32 + dy) as usize;
            if self.is_interior(nx, ny)
                && matches!(self.grid[nx][ny], Cell::Path | Cell::End)
                && self.solve(nx, ny)
            {
                return true;
            }
        }

        // Dead branch: erase the mark so sibling branches see a clean cell.
        self.grid[x][y] = Cell::Path;
        false
    }
}

impl fmt::Display for Maze {
    /// One line per row, one character per cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .grid
            .iter()
            .map(|row| row.iter().map(|c| c.as_char()).join(""))
            .join("\n");
        write!(f, "{text}")
    }
}
