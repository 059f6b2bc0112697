//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the letter-block puzzle: the board,
//! piece geometry, the randomizer, scoring and the game state machine.
//! It has **no dependencies** on timers, terminals or I/O, which makes it:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every command is one explicit state transition
//! - **Portable**: the game loop and the input layer sit on top of it
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with row-full checks and line clearing
//! - [`pieces`]: the seven letter shapes and piece values
//! - [`geometry`]: pure collision, rotation, merge and line-clear functions
//! - [`rng`]: seedable uniform piece randomizer
//! - [`scoring`]: line-clear points, level and drop-speed formulas
//! - [`game_state`]: the complete state and its command handlers
//! - [`snapshot`]: read-only view handed to renderers
//!
//! # Game Rules
//!
//! - **Uniform draws**: every piece is an independent uniform pick; there is
//!   no 7-bag, so long streaks of one kind are possible
//! - **Plain rotation**: clockwise only, rejected on collision, no wall kicks
//! - **Instant lock**: a piece locks as soon as a downward move is blocked
//! - **Scoring**: 100/300/500/800 for 1-4 lines, times the current level
//!
//! # Example
//!
//! ```
//! use wesm_tetris_core::GameState;
//! use wesm_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.level(), 1);
//! assert!(!game.game_over());
//! ```

pub mod board;
pub mod game_state;
pub mod geometry;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use wesm_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use geometry::{clear_full_lines, collides, merge, rotate_clockwise, LineClear, Offset};
pub use pieces::{get_shape, Piece, Shape, SPAWN_POSITION};
pub use rng::{PieceRandomizer, SimpleRng};
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_score};
pub use snapshot::{ActiveSnapshot, DisplayBoard, GameSnapshot};
