pub mod eval_stats;
pub mod game_metrics;

pub use eval_stats::EvalStats;
pub use game_metrics::GameMetrics;
