//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering
//! dependencies. Keyboard play, the autopilot and headless evaluation all
//! drive the same engine.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, StepResult};
pub use state::{CollisionType, ControlMode, GameState, Position, Snake};
