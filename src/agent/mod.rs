//! Autopilot decision logic
//!
//! The autopilot works from a snapshot of the game state and produces one
//! direction per tick:
//!
//! - `planner`: breadth-first search for a shortest path to the food,
//!   treating body cells as obstacles that vacate over time
//! - `survival`: flood-fill fallback that keeps the snake in open space
//!   when no path to the food exists
//! - `autopilot`: caches the current plan and decides when to replan
//!
//! Nothing in here touches the engine. Decisions come back as plain
//! directions and the caller feeds them into the game as actions.

pub mod autopilot;
pub mod planner;
pub mod survival;

pub use autopilot::Autopilot;
pub use planner::find_path;
pub use survival::{reachable_area, survival_move};

use crate::game::Direction;

/// Order in which neighbor moves are tried
///
/// Ties in the survival heuristic resolve to the earliest entry, so this
/// order is part of the agent's observable behavior.
pub const SCAN_ORDER: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];
