//! Game state module - manages the complete game state
//!
//! This module ties together the board, pieces, randomizer and scoring.
//! Every command is one transition in [`GameState::apply_action`]; timing
//! lives outside the core, which only exposes `move_down` for the drop clock.

use crate::board::Board;
use crate::geometry::{clear_full_lines, collides, merge, rotate_clockwise, LineClear, Offset};
use crate::pieces::Piece;
use crate::rng::PieceRandomizer;
use crate::scoring::{drop_interval_ms, level_for_lines, line_clear_score};
use crate::snapshot::{ActiveSnapshot, DisplayBoard, GameSnapshot};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Piece,
    next: Piece,
    randomizer: PieceRandomizer,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    paused: bool,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed: empty board and two fresh pieces
    pub fn new(seed: u32) -> Self {
        let mut randomizer = PieceRandomizer::new(seed);
        let current = randomizer.random_piece();
        let next = randomizer.random_piece();
        Self::assemble(Board::new(), current, next, 0, randomizer)
    }

    /// Create a game from an arbitrary position.
    ///
    /// Useful for replays and scripted scenarios. Score starts at 0; level and
    /// drop speed are derived from `lines`. Pieces drawn after `next` come from
    /// `seed`. If `current` already collides, the game is over from the start.
    pub fn from_parts(board: Board, current: Piece, next: Piece, lines: u32, seed: u32) -> Self {
        let mut state = Self::assemble(board, current, next, lines, PieceRandomizer::new(seed));
        state.game_over = collides(&state.current, &state.board, Offset::ZERO);
        state
    }

    fn assemble(
        board: Board,
        current: Piece,
        next: Piece,
        lines: u32,
        randomizer: PieceRandomizer,
    ) -> Self {
        let level = level_for_lines(lines);
        Self {
            board,
            current,
            next,
            randomizer,
            episode_id: 0,
            last_event: None,
            score: 0,
            level,
            lines,
            drop_interval_ms: drop_interval_ms(level),
            paused: false,
            game_over: false,
        }
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Whether movement commands and the drop clock are live
    pub fn is_running(&self) -> bool {
        !self.game_over && !self.paused
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn current(&self) -> Piece {
        self.current
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether the current piece could move by (dx, dy)
    pub fn can_move(&self, dx: i8, dy: i8) -> bool {
        !collides(&self.current, &self.board, Offset::new(dx, dy))
    }

    /// Board with the current piece drawn in. The piece is left out once the
    /// game is over.
    pub fn display_board(&self) -> DisplayBoard {
        let mut grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.board.write_grid(&mut grid);

        if !self.game_over {
            for (x, y) in self.current.cells() {
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    grid[y as usize][x as usize] = Some(self.current.kind);
                }
            }
        }

        grid
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.display_board = self.display_board();
        out.active = if self.game_over {
            None
        } else {
            Some(ActiveSnapshot::from(self.current))
        };
        out.next = self.next.kind;
        out.next_shape = self.next.shape;
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.drop_interval_ms = self.drop_interval_ms;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Try to move the current piece
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.is_running() || !self.can_move(dx, dy) {
            return false;
        }
        self.current = self.current.shifted(dx, dy);
        true
    }

    /// Move down one row, or lock the piece if it is resting on something.
    ///
    /// This is also what the drop clock calls on every tick.
    pub fn move_down(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        if self.can_move(0, 1) {
            self.current = self.current.shifted(0, 1);
        } else {
            self.lock_piece();
        }
        true
    }

    /// Rotate clockwise if the rotated piece fits where it is
    pub fn try_rotate(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let rotated = rotate_clockwise(&self.current);
        if collides(&rotated, &self.board, Offset::ZERO) {
            return false;
        }
        self.current = rotated;
        true
    }

    /// Drop the current piece to the lowest free row and lock it.
    /// Returns the number of rows fallen.
    pub fn hard_drop(&mut self) -> Option<u32> {
        if !self.is_running() {
            return None;
        }

        let mut distance = 0;
        while self.can_move(0, 1) {
            self.current = self.current.shifted(0, 1);
            distance += 1;
        }

        self.lock_piece();
        Some(distance)
    }

    /// Commit the current piece to the board and spawn the next one
    pub fn lock_piece(&mut self) {
        let locked = self.current;
        let merged = merge(&locked, &self.board);
        let LineClear {
            board,
            lines_cleared,
        } = clear_full_lines(&merged);
        self.board = board;

        // Points use the level the piece locked at, before any level-up.
        let line_clear_score = line_clear_score(lines_cleared, self.level);
        self.score = self.score.saturating_add(line_clear_score);
        self.lines += lines_cleared;

        let previous_level = self.level;
        self.level = level_for_lines(self.lines);
        self.drop_interval_ms = drop_interval_ms(self.level);

        self.current = self.next;
        self.next = self.randomizer.random_piece();

        if collides(&self.current, &self.board, Offset::ZERO) {
            self.game_over = true;
        }

        self.last_event = Some(LockEvent {
            kind: locked.kind,
            lines_cleared,
            line_clear_score,
            level: self.level,
            level_up: self.level > previous_level,
            game_over: self.game_over,
        });
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Flip pause, unless the game is over
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Throw the current game away and start over with fresh pieces
    pub fn restart(&mut self) {
        let seed = self.randomizer.seed();
        let next_episode = self.episode_id.wrapping_add(1);
        *self = Self::new(seed);
        self.episode_id = next_episode;
    }

    /// Apply a game action. Returns whether the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::MoveDown => self.move_down(),
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => self.hard_drop().is_some(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
