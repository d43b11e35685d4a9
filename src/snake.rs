use std::collections::{HashSet, VecDeque};
use std::fmt;

use crate::config::{GRID_SIZE, START_CELL};
use crate::direction::Direction;
use crate::error::SnakeError;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell every fresh snake starts on.
    #[must_use]
    pub const fn start() -> Self {
        Self::new(START_CELL.0, START_CELL.1)
    }

    /// Returns true when the cell lies on the grid.
    #[must_use]
    pub fn is_within_grid(self) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < GRID_SIZE && self.y < GRID_SIZE
    }

    /// Returns the neighbouring cell one step along `direction`.
    ///
    /// The result may be off the grid; callers decide whether that is a wall hit.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Ordered snake body, head first.
///
/// The body is never empty and, outside of [`Snake::advance`] misuse, never
/// overlaps itself. Collision checks belong to the engine.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Cell) -> Self {
        Self {
            body: VecDeque::from([start]),
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    pub fn from_segments(segments: Vec<Cell>) -> Result<Self, SnakeError> {
        if segments.is_empty() {
            return Err(SnakeError::Empty);
        }

        let mut seen = HashSet::with_capacity(segments.len());
        for &segment in &segments {
            if !segment.is_within_grid() {
                return Err(SnakeError::OutOfBounds(segment));
            }
            if !seen.insert(segment) {
                return Err(SnakeError::Overlap(segment));
            }
        }

        Ok(Self {
            body: VecDeque::from(segments),
        })
    }

    /// Moves the head to `new_head`, keeping the old tail when `grow` is set.
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    #[must_use]
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    #[must_use]
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new(Cell::start())
    }
}
