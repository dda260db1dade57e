pub mod eval;
pub mod play;

pub use eval::{EvalConfig, EvalMode};
pub use play::PlayMode;
