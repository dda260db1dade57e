//! Plan caching and replanning on top of the path planner

use std::collections::VecDeque;

use crate::game::{Direction, GameState};

use super::planner::{find_path, is_open_after};
use super::survival::survival_move;

/// Drives the snake one direction per tick
///
/// A plan is computed with [`find_path`] and then consumed step by step,
/// replanning only when the world changed out from under it. When no path to
/// the food exists the autopilot falls back to [`survival_move`]; `None`
/// means even that found nothing, and the caller should let the snake keep
/// going straight into whatever ends the game.
#[derive(Debug)]
pub struct Autopilot {
    plan: VecDeque<Direction>,
    last_seen: Option<GameState>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self {
            plan: VecDeque::new(),
            last_seen: None,
        }
    }

    /// Decide the next direction for the given state
    ///
    /// Returns None when the game is paused or finished, and when no safe
    /// move exists at all.
    pub fn next_move(&mut self, state: &GameState) -> Option<Direction> {
        if !state.is_playable() {
            return None;
        }

        if self.needs_replan(state) {
            self.plan = find_path(state).into();
        }

        let decision = self.take_plan_step(state).or_else(|| survival_move(state));
        self.last_seen = Some(state.clone());
        decision
    }

    /// Forget the cached plan, for restarts and control handovers
    pub fn reset(&mut self) {
        self.plan.clear();
        self.last_seen = None;
    }

    /// A plan is only trusted while the world looks like it did when the
    /// plan was made
    fn needs_replan(&self, state: &GameState) -> bool {
        let Some(last) = &self.last_seen else {
            return true;
        };

        last.food != state.food || last.snake.len() != state.snake.len() || self.plan.is_empty()
    }

    /// Consume the next plan step if it is still safe to take right now
    fn take_plan_step(&mut self, state: &GameState) -> Option<Direction> {
        let next = *self.plan.front()?;
        let target = state.snake.head().step(next);

        if is_open_after(state, target, 0) {
            self.plan.pop_front();
            Some(next)
        } else {
            // The plan went stale in a way the replan triggers missed.
            // Drop it rather than walk into a collision.
            self.plan.clear();
            None
        }
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new()
    }
}
