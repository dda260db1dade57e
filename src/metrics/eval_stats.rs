//! Statistics tracking for headless autopilot evaluation
//!
//! Tracks per-episode scores, step counts and final snake lengths using
//! rolling windows for smoothed statistics.

use std::collections::VecDeque;

/// Evaluation statistics tracker with rolling averages
///
/// # Example
///
/// ```rust
/// use autosnake::metrics::EvalStats;
///
/// let mut stats = EvalStats::new(100);
///
/// // Record an episode: score, steps, final snake length
/// stats.record_episode(40, 150, 5);
///
/// println!("Mean score: {}", stats.mean_score());
/// println!("{}", stats.format_summary());
/// ```
#[derive(Debug, Clone)]
pub struct EvalStats {
    /// Episode scores (rolling window)
    scores: VecDeque<u32>,

    /// Episode lengths in steps (rolling window)
    episode_steps: VecDeque<usize>,

    /// Final snake lengths (rolling window)
    snake_lengths: VecDeque<usize>,

    /// Best score seen across the whole run
    best_score: u32,

    /// Total number of episodes completed
    total_episodes: usize,

    /// Total number of engine steps taken
    total_steps: usize,

    /// Window size for rolling averages
    window_size: usize,
}

impl EvalStats {
    /// Create a new statistics tracker
    ///
    /// # Arguments
    ///
    /// * `window_size` - Number of recent episodes to keep for rolling averages
    pub fn new(window_size: usize) -> Self {
        Self {
            scores: VecDeque::with_capacity(window_size),
            episode_steps: VecDeque::with_capacity(window_size),
            snake_lengths: VecDeque::with_capacity(window_size),
            best_score: 0,
            total_episodes: 0,
            total_steps: 0,
            window_size,
        }
    }

    /// Record the completion of an episode
    ///
    /// # Arguments
    ///
    /// * `score` - Points scored during the episode
    /// * `steps` - Number of engine steps the episode ran for
    /// * `snake_length` - Length of the snake when the episode ended
    ///
    /// # Example
    ///
    /// ```rust
    /// use autosnake::metrics::EvalStats;
    ///
    /// let mut stats = EvalStats::new(100);
    /// stats.record_episode(40, 150, 5);
    ///
    /// assert_eq!(stats.total_episodes(), 1);
    /// assert_eq!(stats.total_steps(), 150);
    /// assert_eq!(stats.best_score(), 40);
    /// ```
    pub fn record_episode(&mut self, score: u32, steps: usize, snake_length: usize) {
        Self::push_deque(&mut self.scores, score, self.window_size);
        Self::push_deque(&mut self.episode_steps, steps, self.window_size);
        Self::push_deque(&mut self.snake_lengths, snake_length, self.window_size);
        self.best_score = self.best_score.max(score);
        self.total_episodes += 1;
        self.total_steps += steps;
    }

    /// Mean score over the rolling window, 0.0 before any episodes
    pub fn mean_score(&self) -> f32 {
        let sum: u32 = self.scores.iter().sum();
        if self.scores.is_empty() {
            0.0
        } else {
            sum as f32 / self.scores.len() as f32
        }
    }

    /// Mean steps per episode over the rolling window
    pub fn mean_steps(&self) -> f32 {
        let sum: usize = self.episode_steps.iter().sum();
        if self.episode_steps.is_empty() {
            0.0
        } else {
            sum as f32 / self.episode_steps.len() as f32
        }
    }

    /// Mean final snake length over the rolling window
    pub fn mean_snake_length(&self) -> f32 {
        let sum: usize = self.snake_lengths.iter().sum();
        if self.snake_lengths.is_empty() {
            0.0
        } else {
            sum as f32 / self.snake_lengths.len() as f32
        }
    }

    /// Best score seen since the tracker was created
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Get the total number of episodes completed
    pub fn total_episodes(&self) -> usize {
        self.total_episodes
    }

    /// Get the total number of engine steps taken
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Get the window size for rolling averages
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Format a summary of the current statistics
    ///
    /// # Example
    ///
    /// ```rust
    /// use autosnake::metrics::EvalStats;
    ///
    /// let mut stats = EvalStats::new(100);
    /// stats.record_episode(40, 150, 5);
    ///
    /// println!("{}", stats.format_summary());
    /// // Output: Episodes: 1 | Steps: 150 | Score: 40.00 (best 40) | Len: 5.0 | Ep steps: 150.0
    /// ```
    pub fn format_summary(&self) -> String {
        format!(
            "Episodes: {} | Steps: {} | Score: {:.2} (best {}) | Len: {:.1} | Ep steps: {:.1}",
            self.total_episodes,
            self.total_steps,
            self.mean_score(),
            self.best_score,
            self.mean_snake_length(),
            self.mean_steps(),
        )
    }

    /// Helper function to push to a deque with size limit
    fn push_deque<T>(deque: &mut VecDeque<T>, value: T, window_size: usize) {
        if deque.len() >= window_size {
            deque.pop_front();
        }
        deque.push_back(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let stats = EvalStats::new(100);
        assert_eq!(stats.window_size(), 100);
        assert_eq!(stats.total_episodes(), 0);
        assert_eq!(stats.total_steps(), 0);
        assert_eq!(stats.best_score(), 0);
    }

    #[test]
    fn test_record_episode() {
        let mut stats = EvalStats::new(100);
        stats.record_episode(30, 50, 4);

        assert_eq!(stats.total_episodes(), 1);
        assert_eq!(stats.total_steps(), 50);
        assert!((stats.mean_score() - 30.0).abs() < 1e-5);
        assert!((stats.mean_steps() - 50.0).abs() < 1e-5);
        assert!((stats.mean_snake_length() - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_rolling_average() {
        let mut stats = EvalStats::new(3);

        stats.record_episode(10, 10, 2);
        stats.record_episode(20, 20, 3);
        stats.record_episode(30, 30, 4);

        assert_eq!(stats.total_episodes(), 3);
        assert!((stats.mean_score() - 20.0).abs() < 1e-5);

        // A 4th episode evicts the first from the window
        stats.record_episode(40, 40, 5);

        assert_eq!(stats.total_episodes(), 4);
        // Mean is now (20 + 30 + 40) / 3 = 30
        assert!((stats.mean_score() - 30.0).abs() < 1e-5);
    }

    #[test]
    fn test_best_score_survives_the_window() {
        let mut stats = EvalStats::new(2);

        stats.record_episode(90, 100, 10);
        stats.record_episode(10, 10, 2);
        stats.record_episode(20, 20, 3);

        // 90 left the rolling window but stays the best
        assert_eq!(stats.best_score(), 90);
        assert!((stats.mean_score() - 15.0).abs() < 1e-5);
    }

    #[test]
    fn test_total_steps_accumulate() {
        let mut stats = EvalStats::new(10);

        stats.record_episode(10, 10, 2);
        stats.record_episode(20, 20, 3);
        stats.record_episode(30, 30, 4);

        assert_eq!(stats.total_steps(), 60);
    }

    #[test]
    fn test_format_summary() {
        let mut stats = EvalStats::new(100);
        stats.record_episode(40, 150, 5);

        let summary = stats.format_summary();
        assert!(summary.contains("Episodes: 1"));
        assert!(summary.contains("Steps: 150"));
        assert!(summary.contains("Score: 40.00"));
        assert!(summary.contains("best 40"));
        assert!(summary.contains("Len: 5.0"));
        assert!(summary.contains("Ep steps: 150.0"));
    }

    #[test]
    fn test_empty_stats() {
        let stats = EvalStats::new(100);

        assert_eq!(stats.mean_score(), 0.0);
        assert_eq!(stats.mean_steps(), 0.0);
        assert_eq!(stats.mean_snake_length(), 0.0);
    }
}
