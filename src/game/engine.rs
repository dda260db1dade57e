use super::{
    action::{Action, Direction},
    config::GameConfig,
    state::{CollisionType, ControlMode, GameState, Position, Snake},
};
use rand::rngs::ThreadRng;
use rand::Rng;

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Whether the game has terminated
    pub terminated: bool,
    /// Type of collision if one occurred
    pub collision: Option<CollisionType>,
}

/// The game engine that handles all game logic
///
/// Generic over the random source so tests can drive food placement with a
/// seeded generator.
pub struct GameEngine<R: Rng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<ThreadRng> {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create a game engine with an explicit random source
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reset the game to initial state under the given control mode
    pub fn reset(&mut self, mode: ControlMode) -> GameState {
        let center = (self.config.board_size / 2) as i32;

        let snake = Snake::new(
            Position::new(center, center),
            Direction::Right,
            self.config.initial_snake_length,
        );

        let food = self.spawn_food(&snake);

        GameState::new(snake, food, self.config.board_size, mode)
    }

    /// Execute one step of the game
    ///
    /// Paused and finished games are left untouched.
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.is_playable() {
            return StepResult {
                ate_food: false,
                terminated: state.is_over,
                collision: None,
            };
        }

        // Update direction based on action. A one-cell snake has no neck and
        // may double back freely.
        if let Action::Move(requested) = action {
            if !(state.snake.len() > 1 && state.snake.direction.is_opposite(requested)) {
                state.snake.direction = requested;
            }
        }

        // Calculate new head position
        let new_head = state.snake.head().step(state.snake.direction);

        // Check for collisions
        if let Some(collision) = self.check_collision(state, new_head) {
            state.end_game();
            state.steps += 1;

            return StepResult {
                ate_food: false,
                terminated: true,
                collision: Some(collision),
            };
        }

        // Check if snake ate food
        let ate_food = new_head == state.food;

        // Move snake (grow if ate food)
        state.snake.advance(ate_food);

        if ate_food {
            state.score += self.config.points_per_food;

            // A snake covering every cell leaves nowhere to put food
            if state.snake.len() >= state.board_size * state.board_size {
                state.end_game();
                state.steps += 1;

                return StepResult {
                    ate_food: true,
                    terminated: true,
                    collision: None,
                };
            }

            state.food = self.spawn_food(&state.snake);
        }

        state.steps += 1;

        StepResult {
            ate_food,
            terminated: false,
            collision: None,
        }
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        // Check wall collision
        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        // Check self-collision. The tail counts: it only vacates after this
        // check passes.
        if state.snake.occupies(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Spawn food at a random empty position
    ///
    /// Rejection sampling: callers must ensure at least one free cell exists.
    pub fn spawn_food(&mut self, snake: &Snake) -> Position {
        loop {
            let x = self.rng.gen_range(0..self.config.board_size) as i32;
            let y = self.rng.gen_range(0..self.config.board_size) as i32;
            let pos = Position::new(x, y);

            if !snake.occupies(pos) {
                return pos;
            }
        }
    }
}
