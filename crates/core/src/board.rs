//! Board module - the settled cells of the playfield
//!
//! Ten columns by twenty rows, stored row-major in one fixed array. `x` grows
//! to the right and `y` grows downward; row 0 is the top of the well. Pieces
//! that are still falling are never stored here, see [`crate::geometry::merge`].

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const COLS: usize = BOARD_WIDTH as usize;
const ROWS: usize = BOARD_HEIGHT as usize;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; COLS * ROWS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; COLS * ROWS],
        }
    }

    /// Build a board from text rows, bottom-aligned.
    ///
    /// The last row given becomes row 19. A letter fills the cell with that
    /// piece kind, anything else leaves it empty. Extra rows or columns are
    /// ignored.
    ///
    /// ```
    /// use wesm_tetris_core::Board;
    ///
    /// let board = Board::from_ascii(&["WWWW.WWWWW"]);
    /// assert!(board.is_occupied(0, 19));
    /// assert!(!board.is_occupied(4, 19));
    /// ```
    pub fn from_ascii(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let visible = &rows[rows.len().saturating_sub(ROWS)..];
        let top = ROWS - visible.len();

        for (dy, text) in visible.iter().enumerate() {
            for (x, c) in text.chars().take(COLS).enumerate() {
                board.cells[(top + dy) * COLS + x] = PieceKind::from_char(c);
            }
        }
        board
    }

    #[inline(always)]
    fn slot(x: i8, y: i8) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < COLS)?;
        let y = usize::try_from(y).ok().filter(|&y| y < ROWS)?;
        Some(y * COLS + x)
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at (x, y), `None` when off the board
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::slot(x, y).map(|i| self.cells[i])
    }

    /// Overwrite the cell at (x, y). Off-board writes are refused.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        let Some(i) = Self::slot(x, y) else {
            return false;
        };
        self.cells[i] = cell;
        true
    }

    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.get(x, y).flatten().is_some()
    }

    fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * COLS..(y + 1) * COLS]
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        y < ROWS && self.row(y).iter().all(Option::is_some)
    }

    /// Drop every full row and return how many went.
    ///
    /// Rows that stay are compacted toward the bottom in their original order;
    /// whatever is left above them is emptied.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut dst = ROWS;

        for src in (0..ROWS).rev() {
            if self.is_row_full(src) {
                continue;
            }
            dst -= 1;
            if dst != src {
                self.cells
                    .copy_within(src * COLS..(src + 1) * COLS, dst * COLS);
            }
        }

        self.cells[..dst * COLS].fill(None);
        dst
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(COLS)
    }

    /// Copy the board into a 2D grid (for snapshots)
    pub fn write_grid(&self, out: &mut [[Cell; COLS]; ROWS]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_is_row_major() {
        assert_eq!(Board::slot(0, 0), Some(0));
        assert_eq!(Board::slot(9, 0), Some(9));
        assert_eq!(Board::slot(0, 1), Some(COLS));
        assert_eq!(Board::slot(9, 19), Some(COLS * ROWS - 1));
        assert_eq!(Board::slot(-1, 3), None);
        assert_eq!(Board::slot(3, -1), None);
        assert_eq!(Board::slot(10, 0), None);
        assert_eq!(Board::slot(0, 20), None);
    }

    #[test]
    fn test_set_writes_expected_slot() {
        let mut board = Board::new();

        board.set(7, 2, Some(PieceKind::M));

        assert_eq!(board.cells[2 * COLS + 7], Some(PieceKind::M));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_from_ascii_is_bottom_aligned() {
        let board = Board::from_ascii(&["E.........", "..........", "SSSSSSSSS."]);

        assert_eq!(board.get(0, 17), Some(Some(PieceKind::E)));
        assert!(!board.is_row_full(19));
        assert_eq!(board.get(8, 19), Some(Some(PieceKind::S)));
        assert_eq!(board.get(9, 19), Some(None));
        assert_eq!(board.filled_count(), 10);
    }

    #[test]
    fn test_from_ascii_keeps_bottom_rows_when_too_tall() {
        let mut rows = vec!["W........."; 25];
        rows[24] = "T.........";
        let board = Board::from_ascii(&rows);

        assert_eq!(board.filled_count(), 20);
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
    }

    #[test]
    fn test_clear_full_rows_keeps_order() {
        let mut board = Board::from_ascii(&[
            "C.........",
            "WWWWWWWWWW",
            ".H........",
            "MMMMMMMMMM",
        ]);

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.get(1, 19), Some(Some(PieceKind::H)));
        assert_eq!(board.get(0, 18), Some(Some(PieceKind::C)));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_write_grid() {
        let board = Board::from_ascii(&["T........E"]);
        let mut grid = [[None; COLS]; ROWS];
        board.write_grid(&mut grid);

        assert_eq!(grid[19][0], Some(PieceKind::T));
        assert_eq!(grid[19][9], Some(PieceKind::E));
        assert_eq!(grid[18][0], None);
    }
}
