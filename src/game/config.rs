use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square game grid
    pub board_size: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Points awarded per food eaten
    pub points_per_food: u32,
    /// Milliseconds between moves under keyboard control
    pub human_tick_ms: u64,
    /// Milliseconds between moves under autopilot control
    pub agent_tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 20,
            initial_snake_length: 1,
            points_per_food: 10,
            human_tick_ms: 200,
            agent_tick_ms: 150,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom grid size
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Time between moves under keyboard control
    pub fn human_tick(&self) -> Duration {
        Duration::from_millis(self.human_tick_ms)
    }

    /// Time between moves under autopilot control
    pub fn agent_tick(&self) -> Duration {
        Duration::from_millis(self.agent_tick_ms)
    }
}
