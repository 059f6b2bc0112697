use crate::pieces::{get_shape, Piece, Shape};
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, INITIAL_DROP_MS};

/// Board grid with the active piece composited in, `grid[y][x]`
pub type DisplayBoard = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub display_board: DisplayBoard,
    /// `None` once the game is over
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub next_shape: Shape,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
    pub paused: bool,
    pub game_over: bool,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            display_board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: PieceKind::W,
            next_shape: get_shape(PieceKind::W),
            score: 0,
            lines: 0,
            level: 1,
            drop_interval_ms: INITIAL_DROP_MS,
            paused: false,
            game_over: false,
            episode_id: 0,
        }
    }
}
