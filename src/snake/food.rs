//! food placement on free cells
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grid::{CellIndex, Grid, Position};

/// A single food cell
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Food {
    cell: Position,
}

impl Food {
    #[allow(missing_docs)]
    pub fn new(cell: Position) -> Self {
        Food { cell }
    }

    /// where the food sits
    pub fn cell(&self) -> Position {
        self.cell
    }

    /// Moves the food to a cell picked uniformly from `free_cells`. With no
    /// free cell left the food stays where it is and false is returned.
    pub fn place(&mut self, grid: &Grid, free_cells: &[CellIndex], rng: &mut impl Rng) -> bool {
        match free_cells.choose(rng) {
            Some(idx) => {
                self.cell = grid.to_position(*idx);
                true
            }
            None => false,
        }
    }
}

/// Owns the random number generator food placement draws from. Seed it once
/// per session, tests pass a fixed seed.
#[derive(Debug, Clone)]
pub struct FoodSpawner<R: Rng> {
    rng: R,
}

impl<R: Rng> FoodSpawner<R> {
    #[allow(missing_docs)]
    pub fn new(rng: R) -> Self {
        FoodSpawner { rng }
    }

    /// places `food` on one of `free_cells`, see [`Food::place`]
    pub fn spawn(&mut self, food: &mut Food, grid: &Grid, free_cells: &[CellIndex]) -> bool {
        let placed = food.place(grid, free_cells, &mut self.rng);
        if placed {
            debug!(cell = %food.cell(), free = free_cells.len(), "placed food");
        } else {
            debug!(cell = %food.cell(), "board is full, food stays put");
        }
        placed
    }
}
