//! Letter-piece falling-block game (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `wesm_tetris::{core,engine,input,types}` and ships the
//! terminal runner.

pub use wesm_tetris_core as core;
pub use wesm_tetris_engine as engine;
pub use wesm_tetris_input as input;
pub use wesm_tetris_types as types;
