use rand::Rng;

use super::grid::{Grid, Position};

/// The single food pellet on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Spawn a pellet on a cell not covered by `occupied`.
    pub fn spawn(grid: &Grid, rng: &mut impl Rng, occupied: &[Position]) -> Self {
        Self {
            position: grid.random_empty_cell(rng, occupied),
        }
    }

    /// Move the pellet to a fresh cell not covered by `occupied`.
    pub fn respawn(&mut self, grid: &Grid, rng: &mut impl Rng, occupied: &[Position]) {
        self.position = grid.random_empty_cell(rng, occupied);
    }
}
