use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for a game session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the grid in cells
    pub grid_width: u16,
    /// Height of the grid in cells
    pub grid_height: u16,
    /// Rendered width of one cell in terminal columns
    pub cell_size: u16,
    /// Milliseconds between snake moves
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 15,
            cell_size: 2,
            tick_ms: 150,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing.
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Time between snake moves.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
