//! Keyboard input handling

pub mod handler;

pub use handler::{InputHandler, KeyAction};
