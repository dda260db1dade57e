//! Headless autopilot evaluation
//!
//! Runs the autopilot for a number of episodes without a terminal UI and
//! prints per-episode results plus a rolling summary. Useful for checking
//! how planner changes affect scores without watching games play out.
//!
//! # Example
//!
//! ```rust,ignore
//! use autosnake::modes::{EvalConfig, EvalMode};
//!
//! let mut eval = EvalMode::new(EvalConfig::new(20));
//! eval.run()?;
//! ```

use anyhow::Result;
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::agent::Autopilot;
use crate::game::{Action, ControlMode, GameConfig, GameEngine};
use crate::metrics::EvalStats;

/// Configuration for evaluation mode
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// Number of episodes to run
    pub episodes: usize,

    /// Hard cap on steps per episode, in case the autopilot ends up circling
    pub max_steps: usize,

    /// Game configuration (the tick rates are unused here)
    pub game_config: GameConfig,
}

impl EvalConfig {
    /// Create a new evaluation configuration with defaults
    pub fn new(episodes: usize) -> Self {
        Self {
            episodes,
            max_steps: 10_000,
            game_config: GameConfig::default(),
        }
    }
}

/// Evaluation mode for the autopilot
///
/// Runs episodes back to back as fast as the engine allows, recording scores,
/// step counts and final snake lengths.
pub struct EvalMode<R: Rng> {
    /// Environment the episodes run in
    engine: GameEngine<R>,

    /// Decision maker under test
    autopilot: Autopilot,

    /// Statistics tracker
    stats: EvalStats,

    /// Evaluation configuration
    config: EvalConfig,
}

impl EvalMode<ThreadRng> {
    /// Create a new evaluation mode
    pub fn new(config: EvalConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> EvalMode<R> {
    /// Create an evaluation mode with an explicit random source
    pub fn with_rng(config: EvalConfig, rng: R) -> Self {
        let engine = GameEngine::with_rng(config.game_config.clone(), rng);

        // 100-episode rolling window for the summary
        let stats = EvalStats::new(100);

        Self {
            engine,
            autopilot: Autopilot::new(),
            stats,
            config,
        }
    }

    /// Run the evaluation loop
    pub fn run(&mut self) -> Result<()> {
        self.print_header();

        for episode in 0..self.config.episodes {
            let (score, steps, length) = self.run_episode();
            self.stats.record_episode(score, steps, length);

            println!(
                "[Episode {:>3}/{}] score {:>4} | steps {:>5} | length {:>3}",
                episode + 1,
                self.config.episodes,
                score,
                steps,
                length
            );
        }

        println!("\nEvaluation complete!");
        println!("{}", self.stats.format_summary());

        Ok(())
    }

    /// Run a single episode
    ///
    /// # Returns
    ///
    /// A tuple containing:
    /// - Final score
    /// - Number of steps the episode ran for
    /// - Final snake length
    fn run_episode(&mut self) -> (u32, usize, usize) {
        let mut state = self.engine.reset(ControlMode::Auto);
        self.autopilot.reset();
        let mut steps = 0;

        while state.is_playable() && steps < self.config.max_steps {
            let action = self
                .autopilot
                .next_move(&state)
                .map(Action::Move)
                .unwrap_or(Action::Continue);

            self.engine.step(&mut state, action);
            steps += 1;
        }

        (state.score, steps, state.snake.len())
    }

    /// Print evaluation header information
    fn print_header(&self) {
        println!("{}", "=".repeat(70));
        println!("Autopilot Evaluation - autosnake");
        println!("{}", "=".repeat(70));
        println!("Episodes: {}", self.config.episodes);
        println!(
            "Board: {0}x{0} grid",
            self.config.game_config.board_size
        );
        println!("Step cap: {} per episode", self.config.max_steps);
        println!("{}", "=".repeat(70));
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_eval_config_creation() {
        let config = EvalConfig::new(50);
        assert_eq!(config.episodes, 50);
        assert_eq!(config.max_steps, 10_000);
    }

    #[test]
    fn test_episode_reaches_food_on_open_board() {
        let mut config = EvalConfig::new(1);
        config.game_config = GameConfig::new(6);

        let mut eval = EvalMode::with_rng(config, ChaCha8Rng::seed_from_u64(11));
        let (score, steps, length) = eval.run_episode();

        // From length 1 on an open board the first food is always reachable
        assert!(score >= 10);
        assert!(length >= 2);
        assert!(steps > 0);
    }

    #[test]
    fn test_step_cap_is_respected() {
        let mut config = EvalConfig::new(1);
        config.game_config = GameConfig::new(6);
        config.max_steps = 5;

        let mut eval = EvalMode::with_rng(config, ChaCha8Rng::seed_from_u64(3));
        let (_, steps, _) = eval.run_episode();

        assert!(steps <= 5);
    }

    #[test]
    fn test_episodes_are_independent() {
        let mut config = EvalConfig::new(2);
        config.game_config = GameConfig::new(6);
        config.max_steps = 500;

        let mut eval = EvalMode::with_rng(config, ChaCha8Rng::seed_from_u64(5));
        let first = eval.run_episode();
        let second = eval.run_episode();

        // Both start over from a fresh length-1 snake
        assert!(first.0 >= 10);
        assert!(second.0 >= 10);
    }
}
