//! Interactive maze walking

use crate::{Cell, Maze};

/// A single navigation move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Map a WASD key to a move; any other character is no move at all.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'w' => Some(Move::Up),
            's' => Some(Move::Down),
            'a' => Some(Move::Left),
            'd' => Some(Move::Right),
            _ => None,
        }
    }

    fn offset(self) -> (i32, i32) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }
}

/// Result of one navigation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Player advanced onto an open cell
    Moved,
    /// Destination was a wall or outside the interior; position unchanged
    Blocked,
    /// Player stepped onto the end cell; navigation is over
    Reached,
    /// The end was already reached earlier; steps are ignored
    Finished,
}

/// Walks a player marker through a maze, one move at a time.
///
/// Holds the only mutable borrow of the maze while navigating. The player
/// starts on the start cell `(1, 1)`; each accepted move clears the old
/// position back to open path and stamps the marker on the new one.
pub struct Navigator<'a> {
    maze: &'a mut Maze,
    x: usize,
    y: usize,
    finished: bool,
}

impl<'a> Navigator<'a> {
    pub fn new(maze: &'a mut Maze) -> Self {
        Navigator {
            maze,
            x: 1,
            y: 1,
            finished: false,
        }
    }

    /// Current player position.
    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Whether the end cell has been reached.
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Read access to the maze for rendering between steps.
    pub fn maze(&self) -> &Maze {
        self.maze
    }

    /// Attempt one move.
    ///
    /// The candidate cell is checked against the interior bounds before it
    /// is read, so movement never depends on the border walls alone. Moves
    /// into anything but open path or the end cell are rejected without
    /// mutating the grid.
    pub fn step(&mut self, mov: Move) -> Outcome {
        if self.finished {
            return Outcome::Finished;
        }

        let (dx, dy) = mov.offset();
        let nx = (self.x as i32 + dx) as usize;
        let ny = (self.y as i32 + dy) as usize;
        if !self.maze.is_interior(nx, ny) {
            return Outcome::Blocked;
        }
        let destination = self.maze.get(nx, ny);
        if !matches!(destination, Cell::Path | Cell::End) {
            return Outcome::Blocked;
        }

        self.maze.set(self.x, self.y, Cell::Path);
        self.maze.set(nx, ny, Cell::Start);
        (self.x, self.y) = (nx, ny);

        if destination == Cell::End {
            self.finished = true;
            Outcome::Reached
        } else {
            Outcome::Moved
        }
    }
}
