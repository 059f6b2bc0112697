//! Engine module - drives a game over time.
//!
//! The core crate only knows commands; this crate adds the parts that deal
//! with time and lifecycle:
//!
//! - [`clock`]: the repeating drop timer, fed elapsed milliseconds
//! - [`game_loop`]: synchronous state + clock pairing for hosts with their own loop
//! - [`session`]: a mounted game on its own tokio task, with throttled input
//!   and a snapshot channel
//! - [`events`]: optional JSON-lines event log
//! - [`config`]: environment-driven settings
//!
//! # Example
//!
//! ```
//! use wesm_tetris_engine::GameLoop;
//! use wesm_tetris_types::GameAction;
//!
//! let mut game = GameLoop::with_seed(7);
//! game.apply(GameAction::MoveLeft);
//! game.advance(600);
//!
//! assert_eq!(game.state().current().y, 1);
//! assert_eq!(game.remaining_ms(), Some(600));
//! ```

pub mod clock;
pub mod config;
pub mod events;
pub mod game_loop;
pub mod session;

pub use wesm_tetris_core as core;
pub use wesm_tetris_input as input;
pub use wesm_tetris_types as types;

pub use clock::DropClock;
pub use config::EngineConfig;
pub use events::{EngineEvent, EventLog};
pub use game_loop::GameLoop;
pub use session::Session;
