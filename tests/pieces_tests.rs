//! Piece shape and rotation tests

use wesm_tetris::core::pieces::{get_shape, rotate_shape_cw};
use wesm_tetris::core::{collides, rotate_clockwise, Board, GameState, Offset, Piece, SPAWN_POSITION};
use wesm_tetris::types::{PieceKind, PIECE_BOX};

fn cells(piece: &Piece) -> Vec<(i8, i8)> {
    piece.cells().into_iter().collect()
}

#[test]
fn test_w_shape() {
    let piece = Piece::at(PieceKind::W, 0, 0);
    assert_eq!(cells(&piece), vec![(0, 1), (2, 1), (0, 2), (1, 2), (2, 2)]);
}

#[test]
fn test_t_shape() {
    let piece = Piece::at(PieceKind::T, 0, 0);
    assert_eq!(cells(&piece), vec![(0, 1), (1, 1), (2, 1), (1, 2), (1, 3)]);
}

#[test]
fn test_h_matches_m() {
    assert_eq!(get_shape(PieceKind::H), get_shape(PieceKind::M));
}

#[test]
fn test_shapes_fit_three_columns() {
    for kind in PieceKind::ALL {
        let shape = get_shape(kind);
        for row in shape.iter() {
            assert!(!row[PIECE_BOX - 1], "{:?} uses the last column", kind);
        }
        assert!(shape.iter().any(|row| row[0]), "{:?} leaves column 0 empty", kind);
    }
}

#[test]
fn test_spawn_position() {
    let piece = Piece::new(PieceKind::C);
    assert_eq!((piece.x, piece.y), SPAWN_POSITION);
    assert!(!collides(&piece, &Board::new(), Offset::ZERO));
}

#[test]
fn test_four_rotations_return_original() {
    for kind in PieceKind::ALL {
        let shape = get_shape(kind);
        let mut rotated = shape;
        for _ in 0..4 {
            rotated = rotate_shape_cw(&rotated);
        }
        assert_eq!(rotated, shape, "{:?}", kind);
    }
}

#[test]
fn test_w_rotation() {
    let piece = Piece::at(PieceKind::W, 0, 0);
    let rotated = rotate_clockwise(&piece);
    assert_eq!(cells(&rotated), vec![(1, 0), (2, 0), (1, 1), (1, 2), (2, 2)]);
    // Rotation never moves the anchor
    assert_eq!((rotated.x, rotated.y), (0, 0));
}

#[test]
fn test_rotation_rejected_at_right_wall() {
    // Two turns push W into the box's last column, which is off the board at x = 7.
    let board = Board::new();
    let mut state = GameState::from_parts(
        board,
        Piece::at(PieceKind::W, 7, 5),
        Piece::new(PieceKind::S),
        0,
        1,
    );

    assert!(state.try_rotate());
    let once = state.current();
    assert!(!state.try_rotate());
    assert_eq!(state.current(), once);
}

#[test]
fn test_rotation_has_no_kicks() {
    let board = Board::new();
    let mut blocked = board.clone();
    // Cell the rotated S needs: box (1,0) at anchor (3,5)
    blocked.set(4, 5, Some(PieceKind::E));

    let piece = Piece::at(PieceKind::S, 3, 5);
    let rotated = rotate_clockwise(&piece);
    assert!(!collides(&rotated, &board, Offset::ZERO));
    assert!(collides(&rotated, &blocked, Offset::ZERO));

    let mut state = GameState::from_parts(blocked, piece, Piece::new(PieceKind::W), 0, 1);
    assert!(!state.try_rotate());
    assert_eq!(state.current(), piece);
}
