use std::collections::VecDeque;

use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The adjacent position one step in a direction
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }

    /// Grid distance ignoring obstacles
    pub fn manhattan_distance(&self, other: Position) -> u32 {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as u32
    }
}

/// The snake in the game
///
/// The body is ordered head first and is never empty. Segments are kept
/// orthogonally contiguous by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = VecDeque::with_capacity(length.max(1));
        body.push_back(head);

        // Initial body segments trail away behind the head
        let (dx, dy) = direction.delta();
        for i in 1..length.max(1) {
            body.push_back(head.offset(-dx * i as i32, -dy * i as i32));
        }

        Self { body, direction }
    }

    /// Build a snake from explicit cells, ordered head first
    pub fn from_cells(cells: impl IntoIterator<Item = Position>, direction: Direction) -> Self {
        let body: VecDeque<Position> = cells.into_iter().collect();
        debug_assert!(!body.is_empty(), "snake body must not be empty");
        debug_assert!(
            body.iter()
                .zip(body.iter().skip(1))
                .all(|(a, b)| a.manhattan_distance(*b) == 1),
            "snake body must be orthogonally contiguous"
        );
        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Iterate over all body cells, head first
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// Check if any segment sits on the given position
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// How many moves until the segment at `pos` vacates, counted from the
    /// tail: the tail itself is 0, the head is `len() - 1`. Returns None for
    /// positions not on the body.
    pub fn index_from_tail(&self, pos: Position) -> Option<usize> {
        self.body
            .iter()
            .position(|&cell| cell == pos)
            .map(|i| self.body.len() - 1 - i)
    }

    /// Advance one cell in the current direction, keeping the tail in place
    /// when growing
    pub fn advance(&mut self, grow: bool) {
        let new_head = self.head().step(self.direction);
        self.body.push_front(new_head);

        if !grow {
            self.body.pop_back();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Who is steering the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    /// Keyboard steering
    Human,
    /// The autopilot picks every move
    Auto,
}

impl ControlMode {
    pub fn toggled(&self) -> ControlMode {
        match self {
            ControlMode::Human => ControlMode::Auto,
            ControlMode::Auto => ControlMode::Human,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ControlMode::Human => "HUMAN",
            ControlMode::Auto => "AUTO",
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    /// The grid is always square
    pub board_size: usize,
    pub mode: ControlMode,
    pub score: u32,
    pub steps: u32,
    pub is_running: bool,
    pub is_paused: bool,
    pub is_over: bool,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Position, board_size: usize, mode: ControlMode) -> Self {
        Self {
            snake,
            food,
            board_size,
            mode,
            score: 0,
            steps: 0,
            is_running: true,
            is_paused: false,
            is_over: false,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.board_size as i32
            && pos.y >= 0
            && pos.y < self.board_size as i32
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }

    /// True while the world should advance on ticks
    pub fn is_playable(&self) -> bool {
        self.is_running && !self.is_paused && !self.is_over
    }

    /// Flip the pause flag. A finished game cannot be paused.
    pub fn toggle_pause(&mut self) {
        if !self.is_over {
            self.is_paused = !self.is_paused;
        }
    }

    /// Mark the game as finished
    pub fn end_game(&mut self) {
        self.is_over = true;
        self.is_running = false;
    }
}
