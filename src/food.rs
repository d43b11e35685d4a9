use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{GRID_CELLS, GRID_SIZE};
use crate::snake::{Cell, Snake};

/// Source of candidate food cells.
///
/// Every yielded cell must lie on the grid. The engine owns one source for its
/// whole lifetime, so tests can script exact placements.
pub trait CellSource {
    fn next_cell(&mut self) -> Cell;
}

/// Uniform random cells with independent x and y draws.
#[derive(Debug, Clone)]
pub struct RandomCells<R> {
    rng: R,
}

impl<R: Rng> RandomCells<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomCells<StdRng> {
    /// Creates a reproducible source for tests and seeded sessions.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> CellSource for RandomCells<R> {
    fn next_cell(&mut self) -> Cell {
        Cell::new(
            self.rng.gen_range(0..GRID_SIZE),
            self.rng.gen_range(0..GRID_SIZE),
        )
    }
}

/// Replays a fixed list of cells, starting over once it runs out.
///
/// Placement keeps drawing until it sees a free cell, so a script must contain
/// at least one cell the snake will not be covering.
#[derive(Debug, Clone)]
pub struct ScriptedCells {
    cells: Vec<Cell>,
    cursor: usize,
}

impl ScriptedCells {
    /// Creates a script; an empty list degenerates to the origin cell.
    #[must_use]
    pub fn new(cells: Vec<Cell>) -> Self {
        let cells = if cells.is_empty() {
            vec![Cell::new(0, 0)]
        } else {
            cells
        };
        Self { cells, cursor: 0 }
    }

    /// Number of cells handed out so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl CellSource for ScriptedCells {
    fn next_cell(&mut self) -> Cell {
        let cell = self.cells[self.cursor % self.cells.len()];
        self.cursor += 1;
        cell
    }
}

/// Picks a food cell not covered by `snake`, by drawing until one is free.
///
/// Returns `None` without drawing when the snake covers the whole grid.
#[must_use]
pub fn place_food<S: CellSource + ?Sized>(source: &mut S, snake: &Snake) -> Option<Cell> {
    if snake.len() >= GRID_CELLS {
        return None;
    }

    let mut rejected = 0_u32;
    loop {
        let candidate = source.next_cell();
        if !snake.occupies(candidate) {
            debug!("food placed at {candidate} after {rejected} rejected draws");
            return Some(candidate);
        }
        rejected += 1;
    }
}
