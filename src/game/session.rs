use std::time::Duration;

use rand::rngs::ThreadRng;
use tracing::debug;

use super::config::GameConfig;
use super::direction::Direction;
use super::food::Food;
use super::grid::Grid;
use super::score::Score;
use super::snake::Snake;

/// Which screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    MainMenu,
    Playing,
    GameOver,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// The head left the grid
    Wall,
    /// The head ran into the body
    Body,
}

/// What happened during one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub ate_food: bool,
    pub collision: Option<Collision>,
}

/// All mutable state for one process run: the field, the entities on it,
/// the current phase and the move timer. Everything but the grid is
/// recreated on every reset.
pub struct GameSession {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Food,
    pub score: Score,
    phase: Phase,
    move_timer: Duration,
    move_interval: Duration,
    rng: ThreadRng,
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Self {
        let grid = Grid::new(
            config.grid_width as i32,
            config.grid_height as i32,
            config.cell_size,
        );
        let mut rng = rand::thread_rng();
        let snake = Snake::new(grid.center(), Direction::Right);
        let food = Food::spawn(&grid, &mut rng, snake.cells());

        Self {
            grid,
            snake,
            food,
            score: Score::new(),
            phase: Phase::MainMenu,
            move_timer: Duration::ZERO,
            move_interval: config.tick_interval(),
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Start a fresh run: new snake at the grid center heading right, new
    /// food off the snake, score zeroed, move timer cleared.
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.grid.center(), Direction::Right);
        self.food = Food::spawn(&self.grid, &mut self.rng, self.snake.cells());
        self.score.reset();
        self.move_timer = Duration::ZERO;
        self.phase = Phase::Playing;
    }

    /// Leave the game-over screen for the main menu.
    pub fn return_to_menu(&mut self) {
        self.phase = Phase::MainMenu;
    }

    /// Steering applies immediately, so the last direction set before a
    /// tick is the one the move uses. Ignored outside of play.
    pub fn steer(&mut self, direction: Direction) {
        if self.phase == Phase::Playing {
            self.snake.steer(direction);
        }
    }

    /// Feed elapsed frame time into the move timer. Crossing the move
    /// interval clears the timer and performs exactly one move; shorter
    /// frames return None.
    pub fn advance(&mut self, dt: Duration) -> Option<TickOutcome> {
        if self.phase != Phase::Playing {
            return None;
        }

        self.move_timer += dt;
        if self.move_timer < self.move_interval {
            return None;
        }
        self.move_timer = Duration::ZERO;

        Some(self.step())
    }

    /// One simulation step: move, then collision checks, then food.
    fn step(&mut self) -> TickOutcome {
        self.snake.advance();
        let head = self.snake.head();

        if self.grid.is_out_of_bounds(head) {
            self.phase = Phase::GameOver;
            return TickOutcome {
                ate_food: false,
                collision: Some(Collision::Wall),
            };
        }

        if self.snake.collides_with(head) {
            self.phase = Phase::GameOver;
            return TickOutcome {
                ate_food: false,
                collision: Some(Collision::Body),
            };
        }

        let mut ate_food = false;
        if head == self.food.position {
            self.snake.grow();
            self.score.increment();
            self.food
                .respawn(&self.grid, &mut self.rng, self.snake.cells());
            ate_food = true;
            debug!(score = self.score.value(), "food eaten");
        }

        TickOutcome {
            ate_food,
            collision: None,
        }
    }
}
