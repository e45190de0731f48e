use super::direction::Direction;
use super::grid::Position;

/// The snake: an ordered list of occupied cells, head first.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Position>,
    direction: Direction,
    pending_growth: bool,
}

impl Snake {
    /// A new snake is a single head cell; it only grows by eating.
    pub fn new(head: Position, direction: Direction) -> Self {
        Self {
            body: vec![head],
            direction,
            pending_growth: false,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// All occupied cells, head first.
    pub fn cells(&self) -> &[Position] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Change travel direction. A reversal onto the neck is silently
    /// ignored; honoring it would kill the snake on the next move.
    pub fn steer(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.direction = direction;
        }
    }

    /// Advance one cell: prepend the new head and drop the tail unless a
    /// growth is pending. The growth flag is consumed by every move.
    pub fn advance(&mut self) {
        let new_head = self.head().stepped(self.direction);
        self.body.insert(0, new_head);

        if !self.pending_growth {
            self.body.pop();
        }
        self.pending_growth = false;
    }

    /// Grow by one cell on the next advance.
    pub fn grow(&mut self) {
        self.pending_growth = true;
    }

    /// True if `pos` lies on the body, the head cell itself excluded.
    pub fn collides_with(&self, pos: Position) -> bool {
        self.body[1..].contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake_is_single_cell() {
        let snake = Snake::new(Position::new(10, 7), Direction::Right);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(10, 7));
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn test_steer_rejects_reversal_only() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right);

        snake.steer(Direction::Left);
        assert_eq!(snake.direction(), Direction::Right);

        snake.steer(Direction::Up);
        assert_eq!(snake.direction(), Direction::Up);

        snake.steer(Direction::Down);
        assert_eq!(snake.direction(), Direction::Up);

        snake.steer(Direction::Left);
        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn test_advance_keeps_length() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right);

        snake.advance();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(6, 5));
    }

    #[test]
    fn test_grow_adds_one_cell_on_next_advance() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right);

        snake.grow();
        assert_eq!(snake.len(), 1);

        snake.advance();
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.cells(), &[Position::new(6, 5), Position::new(5, 5)]);

        // The flag was consumed; the next advance must not grow again.
        snake.advance();
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.cells(), &[Position::new(7, 5), Position::new(6, 5)]);
    }

    #[test]
    fn test_collides_with_excludes_head() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right);
        snake.grow();
        snake.advance();
        snake.grow();
        snake.advance();

        // Body is (7,5), (6,5), (5,5).
        assert!(!snake.collides_with(Position::new(7, 5)));
        assert!(snake.collides_with(Position::new(6, 5)));
        assert!(snake.collides_with(Position::new(5, 5)));
        assert!(!snake.collides_with(Position::new(8, 5)));
    }

    #[test]
    fn test_single_cell_snake_never_self_collides() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right);
        assert!(!snake.collides_with(snake.head()));
    }
}
