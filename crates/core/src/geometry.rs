//! Pure board/piece functions: collision, rotation, merge and line clearing.
//!
//! None of these mutate their inputs. The game state composes them into
//! command handlers.

use crate::board::Board;
use crate::pieces::Piece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Displacement applied to a piece before a collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    pub x: i8,
    pub y: i8,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0, y: 0 };
    pub const LEFT: Offset = Offset { x: -1, y: 0 };
    pub const RIGHT: Offset = Offset { x: 1, y: 0 };
    pub const DOWN: Offset = Offset { x: 0, y: 1 };

    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }
}

/// Result of [`clear_full_lines`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClear {
    pub board: Board,
    pub lines_cleared: u32,
}

/// Check whether `piece`, displaced by `offset`, hits a wall, the floor or a
/// filled cell.
///
/// Cells above the board (row < 0) are still bounded horizontally but never
/// collide with board contents, so pieces may sit partly above the top edge.
pub fn collides(piece: &Piece, board: &Board, offset: Offset) -> bool {
    piece.offsets().any(|(dx, dy)| {
        let x = piece.x as i16 + dx as i16 + offset.x as i16;
        let y = piece.y as i16 + dy as i16 + offset.y as i16;

        if x < 0 || x >= BOARD_WIDTH as i16 || y >= BOARD_HEIGHT as i16 {
            return true;
        }

        y >= 0 && board.is_occupied(x as i8, y as i8)
    })
}

/// Rotate a piece 90° clockwise inside its box. The caller decides whether
/// the result is allowed.
pub fn rotate_clockwise(piece: &Piece) -> Piece {
    piece.rotated_cw()
}

/// Return a copy of `board` with the piece's cells written in.
///
/// Cells above the board are dropped.
pub fn merge(piece: &Piece, board: &Board) -> Board {
    let mut merged = board.clone();
    for (x, y) in piece.cells() {
        if y >= 0 {
            merged.set(x, y, Some(piece.kind));
        }
    }
    merged
}

/// Remove every full row, shifting the rest down and filling the top with
/// empty rows.
pub fn clear_full_lines(board: &Board) -> LineClear {
    let mut cleared = board.clone();
    let lines_cleared = cleared.clear_full_rows() as u32;
    LineClear {
        board: cleared,
        lines_cleared,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_collides_with_walls_and_floor() {
        let board = Board::new();

        // T box cols 0..=2, rows 1..=3
        let piece = Piece::at(PieceKind::T, 0, 0);
        assert!(!collides(&piece, &board, Offset::ZERO));
        assert!(collides(&piece, &board, Offset::LEFT));

        let right = Piece::at(PieceKind::T, 7, 0);
        assert!(!collides(&right, &board, Offset::ZERO));
        assert!(collides(&right, &board, Offset::RIGHT));

        let bottom = Piece::at(PieceKind::T, 3, 16);
        assert!(!collides(&bottom, &board, Offset::ZERO));
        assert!(collides(&bottom, &board, Offset::DOWN));
    }

    #[test]
    fn test_rows_above_board_skip_occupancy() {
        let mut board = Board::new();
        for x in 0..10 {
            board.set(x, 0, Some(PieceKind::C));
        }

        // Box rows 1-2 sit at y = -2 and y = -1, nothing touches the board yet.
        let above = Piece::at(PieceKind::W, 3, -3);
        assert!(!collides(&above, &board, Offset::ZERO));
        assert!(collides(&above, &board, Offset::DOWN));

        // Horizontal bounds still apply above the board.
        let off_left = Piece::at(PieceKind::W, -1, -4);
        assert!(collides(&off_left, &board, Offset::ZERO));
    }

    #[test]
    fn test_collides_with_filled_cell() {
        let mut board = Board::new();
        board.set(4, 5, Some(PieceKind::H));

        // S covers (4,5) when anchored at (3,3): row 2 -> cols 0,1
        let piece = Piece::at(PieceKind::S, 3, 3);
        assert!(collides(&piece, &board, Offset::ZERO));
        assert!(!collides(&piece, &board, Offset::new(0, -1)));
    }

    #[test]
    fn test_merge_does_not_touch_input() {
        let board = Board::new();
        let piece = Piece::at(PieceKind::E, 0, 16);

        let merged = merge(&piece, &board);

        assert_eq!(board.filled_count(), 0);
        assert_eq!(merged.filled_count(), 7);
        assert_eq!(merged.get(0, 18), Some(Some(PieceKind::E)));
    }

    #[test]
    fn test_merge_skips_rows_above_board() {
        let piece = Piece::at(PieceKind::M, 0, -3);
        let merged = merge(&piece, &Board::new());
        // Only box row 3 lands on the board, rows 1-2 are above the top.
        assert_eq!(merged.filled_count(), 2);
        assert!(merged.is_occupied(0, 0));
        assert!(merged.is_occupied(2, 0));
    }

    #[test]
    fn test_clear_without_full_rows_is_identity() {
        let board = Board::from_ascii(&["W.W.W.W.W.", "EEEEEEEEE."]);
        let result = clear_full_lines(&board);
        assert_eq!(result.lines_cleared, 0);
        assert_eq!(result.board, board);
    }

    #[test]
    fn test_clear_prepends_empty_rows() {
        let board = Board::from_ascii(&["T.........", "SSSSSSSSSS", "SSSSSSSSSS"]);
        let result = clear_full_lines(&board);
        assert_eq!(result.lines_cleared, 2);
        assert_eq!(result.board, Board::from_ascii(&["T........."]));
    }
}
