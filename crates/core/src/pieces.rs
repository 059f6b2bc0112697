//! Pieces module - letter shapes and piece values
//!
//! Every piece lives in a 4x4 box. The box's top-left corner is the piece
//! anchor on the board. Shapes rotate inside the box; there are no kick tables.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, BOARD_WIDTH, PIECE_BOX};

/// Occupancy matrix of a piece, `shape[row][col]`
pub type Shape = [[bool; PIECE_BOX]; PIECE_BOX];

/// Absolute board cells covered by a piece (at most the whole box)
pub type PieceCells = ArrayVec<(i8, i8), { PIECE_BOX * PIECE_BOX }>;

/// Spawn anchor for new pieces (x, y): horizontally centered box, top row
pub const SPAWN_POSITION: (i8, i8) = ((BOARD_WIDTH / 2) as i8 - 2, 0);

const W_ROWS: [&[u8; 4]; 4] = [b"....", b"#.#.", b"###.", b"...."];
const E_ROWS: [&[u8; 4]; 4] = [b"....", b"###.", b"#...", b"###."];
const S_ROWS: [&[u8; 4]; 4] = [b"....", b".##.", b"##..", b"...."];
const M_ROWS: [&[u8; 4]; 4] = [b"....", b"#.#.", b"###.", b"#.#."];
const T_ROWS: [&[u8; 4]; 4] = [b"....", b"###.", b".#..", b".#.."];
const C_ROWS: [&[u8; 4]; 4] = [b"....", b".##.", b"#...", b".##."];
// Same matrix as M; only the tag and color differ.
const H_ROWS: [&[u8; 4]; 4] = [b"....", b"#.#.", b"###.", b"#.#."];

fn shape_from_rows(rows: [&[u8; 4]; 4]) -> Shape {
    let mut shape = [[false; PIECE_BOX]; PIECE_BOX];
    for (dst, src) in shape.iter_mut().zip(rows) {
        for (cell, &b) in dst.iter_mut().zip(src.iter()) {
            *cell = b == b'#';
        }
    }
    shape
}

/// Get the spawn shape for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    let rows = match kind {
        PieceKind::W => W_ROWS,
        PieceKind::E => E_ROWS,
        PieceKind::S => S_ROWS,
        PieceKind::M => M_ROWS,
        PieceKind::T => T_ROWS,
        PieceKind::C => C_ROWS,
        PieceKind::H => H_ROWS,
    };
    shape_from_rows(rows)
}

/// Rotate a shape 90° clockwise: transpose, then reverse each row.
pub fn rotate_shape_cw(shape: &Shape) -> Shape {
    let mut out = [[false; PIECE_BOX]; PIECE_BOX];
    for (r, row) in out.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = shape[PIECE_BOX - 1 - c][r];
        }
    }
    out
}

/// A piece on (or partly above) the board.
///
/// Pieces are plain values: moving or rotating returns a new piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a new piece at the spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_POSITION.0, SPAWN_POSITION.1)
    }

    /// Create a piece in its spawn orientation at an explicit anchor
    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            shape: get_shape(kind),
            x,
            y,
        }
    }

    /// Same piece moved by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Same piece rotated clockwise around its box
    pub fn rotated_cw(&self) -> Self {
        Self {
            shape: rotate_shape_cw(&self.shape),
            ..*self
        }
    }

    /// Offsets of occupied cells inside the box, as (col, row)
    pub fn offsets(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &filled)| filled)
                .map(move |(c, _)| (c as i8, r as i8))
        })
    }

    /// Absolute board coordinates of occupied cells, clamped to the `i8`
    /// range; anything that far out is off the board either way.
    pub fn cells(&self) -> PieceCells {
        self.offsets()
            .map(|(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
            .collect()
    }
}
