//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are plain data with no external dependencies, so they can be
//! used by the core rules, the game loop and the input layer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn anchor**: (3, 0), the top-left corner of the 4x4 piece box
//!
//! # Drop Speed
//!
//! Gravity starts at 600ms per row and speeds up by 40ms per level, never
//! going below 80ms:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 600ms |
//! | 2 | 560ms |
//! | 5 | 440ms |
//! | 10 | 240ms |
//! | 14+ | 80ms |
//!
//! # Examples
//!
//! ```
//! use wesm_tetris_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_char('w').unwrap();
//! assert_eq!(piece, PieceKind::W);
//! assert_eq!(piece.color(), "#fbbf24");
//!
//! assert!(GameAction::MoveLeft.is_throttled());
//! assert!(!GameAction::HardDrop.is_throttled());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of the square box every piece shape lives in
pub const PIECE_BOX: usize = 4;

/// Drop interval at level 1
pub const INITIAL_DROP_MS: u32 = 600;

/// Fastest possible drop interval
pub const MIN_DROP_MS: u32 = 80;

/// Drop interval decrease per level
pub const DROP_STEP_MS: u32 = 40;

/// Cleared lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Minimum spacing between throttled input commands
pub const INPUT_THROTTLE_MS: u32 = 50;

/// Line clear scoring table, indexed by lines cleared in a single lock.
///
/// Points are multiplied by the level that was current when the piece locked.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];


/// The seven letter-shaped piece kinds
///
/// Each kind has a fixed shape and display color:
/// - **W**: yellow
/// - **E**: blue
/// - **S**: green
/// - **M**: red
/// - **T**: purple
/// - **C**: orange
/// - **H**: pink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    W,
    E,
    S,
    M,
    T,
    C,
    H,
}

impl PieceKind {
    /// Every kind, in draw-table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::W,
        PieceKind::E,
        PieceKind::S,
        PieceKind::M,
        PieceKind::T,
        PieceKind::C,
        PieceKind::H,
    ];

    /// Parse piece kind from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use wesm_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('E'), Some(PieceKind::E));
    /// assert_eq!(PieceKind::from_char('h'), Some(PieceKind::H));
    /// assert_eq!(PieceKind::from_char('I'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'W' => Some(PieceKind::W),
            'E' => Some(PieceKind::E),
            'S' => Some(PieceKind::S),
            'M' => Some(PieceKind::M),
            'T' => Some(PieceKind::T),
            'C' => Some(PieceKind::C),
            'H' => Some(PieceKind::H),
            _ => None,
        }
    }

    /// The letter this piece is shaped after
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::W => 'W',
            PieceKind::E => 'E',
            PieceKind::S => 'S',
            PieceKind::M => 'M',
            PieceKind::T => 'T',
            PieceKind::C => 'C',
            PieceKind::H => 'H',
        }
    }

    /// Display color as a CSS hex string
    pub fn color(&self) -> &'static str {
        match self {
            PieceKind::W => "#fbbf24",
            PieceKind::E => "#60a5fa",
            PieceKind::S => "#34d399",
            PieceKind::M => "#f87171",
            PieceKind::T => "#a78bfa",
            PieceKind::C => "#fb923c",
            PieceKind::H => "#ec4899",
        }
    }
}

/// Commands that can be applied to the game state
///
/// Produced by the input layer from keyboard events or on-screen buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it cannot move
    MoveDown,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop piece to the lowest free position and lock it
    HardDrop,
    /// Pause or resume
    TogglePause,
    /// Start a fresh game
    Restart,
}

impl GameAction {
    /// Whether the input throttle applies to this action.
    ///
    /// Rapid soft and hard drops are intentional, everything else is spaced out.
    pub fn is_throttled(&self) -> bool {
        !matches!(self, GameAction::MoveDown | GameAction::HardDrop)
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a piece of that kind
pub type Cell = Option<PieceKind>;

/// Event recorded every time a piece locks onto the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    /// Level after the lock
    pub level: u32,
    pub level_up: bool,
    pub game_over: bool,
}
