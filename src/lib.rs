//! autosnake - Terminal Snake with a pathfinding autopilot
//!
//! This library provides:
//! - Core game logic (game module)
//! - Path planning and the survival fallback (agent module)
//! - TUI rendering (render module) and keyboard input (input module)
//! - Interactive play and headless evaluation (modes module)
//! - Session and evaluation statistics (metrics module)

pub mod agent;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
