use log::{debug, warn};
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Random samples per grid cell before giving up on rejection sampling.
const SAMPLES_PER_CELL: usize = 4;

pub struct FoodPlacer<R: Rng> {
    rng: R,
}

impl<R: Rng> FoodPlacer<R> {
    pub fn new(rng: R) -> Self {
        FoodPlacer { rng }
    }

    /// Picks a uniformly random cell that the snake doesn't cover.
    ///
    /// Rejection sampling is fast while the snake is short. Once the attempt
    /// budget runs out we choose among the remaining free cells directly, and
    /// if the snake fills the whole grid the origin is returned.
    pub fn place(&mut self, grid: &Grid, snake: &Snake) -> Cell {
        let attempts = grid.cell_count() * SAMPLES_PER_CELL;

        for _ in 0..attempts {
            let cell = Cell::new(self.rng.gen_range(0..grid.cols()), self.rng.gen_range(0..grid.rows()));
            if !snake.occupies(cell) {
                debug!("Food placed at ({}, {})", cell.x, cell.y);
                return cell;
            }
        }

        let free = grid.cells().filter(|cell| !snake.occupies(*cell));
        match free.choose(&mut self.rng) {
            Some(cell) => {
                debug!("Food placed at ({}, {}) after {} rejected samples", cell.x, cell.y, attempts);
                cell
            }
            None => {
                warn!("No free cell left for food on a {}x{} grid", grid.cols(), grid.rows());
                Cell::new(0, 0)
            }
        }
    }
}
