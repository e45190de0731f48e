use rand::Rng;

use super::direction::Direction;

/// A cell coordinate on the playing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position shifted by (dx, dy).
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighboring position one cell away in `direction`.
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }
}

/// The playing field. Dimensions and cell size are fixed at construction;
/// the grid holds no mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cell_size: u16,
}

impl Grid {
    /// `cell_size` is the rendered width of one cell in terminal columns.
    pub fn new(width: i32, height: i32, cell_size: u16) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> u16 {
        self.cell_size
    }

    /// The cell a new snake starts on.
    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    /// True if `pos` falls outside [0, width) x [0, height).
    pub fn is_out_of_bounds(&self, pos: Position) -> bool {
        pos.x < 0 || pos.x >= self.width || pos.y < 0 || pos.y >= self.height
    }

    /// Draws uniformly from the grid's cells until one not covered by
    /// `occupied` comes up. Unbounded, but the board never gets anywhere
    /// near full in practice.
    pub fn random_empty_cell(&self, rng: &mut impl Rng, occupied: &[Position]) -> Position {
        loop {
            let pos = Position::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height));
            if !occupied.contains(&pos) {
                return pos;
            }
        }
    }
}
