//! Input module (engine-facing).
//!
//! Maps `crossterm` key events and on-screen directional buttons into
//! [`crate::types::GameAction`], and spaces out repeated commands with a
//! small throttle window. Leaving the game is a host concern: the leave keys
//! are recognized here but never turned into engine commands.

pub mod handler;
pub mod map;
pub mod throttle;

pub use wesm_tetris_types as types;

pub use handler::InputAdapter;
pub use map::{map_button, map_key, should_leave, ButtonCommand, DirectionalButton};
pub use throttle::InputThrottle;
