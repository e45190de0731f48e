//! Core game logic for Snake
//!
//! Everything in here is pure state and rules; no I/O or rendering
//! dependencies. The session struct ties the pieces together and owns
//! the fixed-timestep move timer.

pub mod config;
pub mod direction;
pub mod food;
pub mod grid;
pub mod score;
pub mod session;
pub mod snake;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use food::Food;
pub use grid::{Grid, Position};
pub use score::Score;
pub use session::{Collision, GameSession, Phase, TickOutcome};
pub use snake::Snake;
