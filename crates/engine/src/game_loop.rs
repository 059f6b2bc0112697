//! Game loop - couples the game state with its drop clock.
//!
//! Hosts feed it commands and elapsed time; it advances gravity, restarts the
//! clock whenever the drop interval, the pause state or the episode changes,
//! and queues lock events for observers.

use crate::core::{GameSnapshot, GameState};
use crate::types::{GameAction, LockEvent};

use crate::clock::DropClock;

#[derive(Debug, Clone)]
pub struct GameLoop {
    state: GameState,
    clock: DropClock,
    episode_id: u32,
    events: Vec<LockEvent>,
}

impl GameLoop {
    pub fn new(state: GameState) -> Self {
        let clock = DropClock::new(state.drop_interval_ms(), state.is_running());
        let episode_id = state.episode_id();
        Self {
            state,
            clock,
            episode_id,
            events: Vec::new(),
        }
    }

    /// Fresh game with the given seed
    pub fn with_seed(seed: u32) -> Self {
        Self::new(GameState::new(seed))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn clock(&self) -> &DropClock {
        &self.clock
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Milliseconds until the next gravity tick, `None` while paused or over
    pub fn remaining_ms(&self) -> Option<u32> {
        self.clock.remaining_ms()
    }

    /// Apply a command. Returns whether the state changed.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let changed = self.state.apply_action(action);
        self.collect_event();
        self.sync_clock();
        changed
    }

    /// Let `elapsed_ms` pass, running every gravity tick that falls due.
    /// Returns whether the state changed.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        let mut changed = false;
        let mut feed = elapsed_ms;

        while self.clock.advance(feed) {
            feed = 0;
            changed |= self.state.move_down();
            self.collect_event();
            // A level-up or game over restarts (or stops) the clock, which
            // also discards any remaining backlog.
            self.sync_clock();
        }

        changed
    }

    /// Lock events recorded since the last drain, oldest first
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, LockEvent> {
        self.events.drain(..)
    }

    fn collect_event(&mut self) {
        if let Some(event) = self.state.take_last_event() {
            self.events.push(event);
        }
    }

    fn sync_clock(&mut self) {
        let interval_ms = self.state.drop_interval_ms();
        let running = self.state.is_running();
        let episode_id = self.state.episode_id();

        if interval_ms != self.clock.interval_ms()
            || running != self.clock.running()
            || episode_id != self.episode_id
        {
            self.clock.restart(interval_ms, running);
            self.episode_id = episode_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Piece};
    use crate::types::PieceKind;

    #[test]
    fn test_gravity_moves_piece_each_interval() {
        let mut game = GameLoop::with_seed(12345);
        let y = game.state().current().y;

        assert!(!game.advance(599));
        assert_eq!(game.state().current().y, y);
        assert!(game.advance(1));
        assert_eq!(game.state().current().y, y + 1);
        assert!(game.advance(1200));
        assert_eq!(game.state().current().y, y + 3);
    }

    #[test]
    fn test_pause_stops_and_restarts_clock() {
        let mut game = GameLoop::with_seed(12345);
        game.advance(500);

        assert!(game.apply(GameAction::TogglePause));
        assert_eq!(game.remaining_ms(), None);
        assert!(!game.advance(10_000));

        assert!(game.apply(GameAction::TogglePause));
        // A full interval, not the 100ms left before pausing
        assert_eq!(game.remaining_ms(), Some(600));
    }

    #[test]
    fn test_level_up_applies_new_interval_immediately() {
        let board = Board::from_ascii(&["SSSS.SSSSS"]);
        let state = GameState::from_parts(
            board,
            Piece::new(PieceKind::T),
            Piece::new(PieceKind::W),
            9,
            1,
        );
        let mut game = GameLoop::new(state);
        game.advance(300);

        assert!(game.apply(GameAction::HardDrop));

        assert_eq!(game.state().level(), 2);
        assert_eq!(game.remaining_ms(), Some(560));

        let events: Vec<_> = game.drain_events().collect();
        assert_eq!(events.len(), 1);
        assert!(events[0].level_up);
        assert_eq!(game.drain_events().count(), 0);
    }

    #[test]
    fn test_moves_do_not_reset_clock() {
        let mut game = GameLoop::with_seed(3);
        game.advance(400);
        game.apply(GameAction::MoveLeft);
        game.apply(GameAction::Rotate);
        assert_eq!(game.remaining_ms(), Some(200));
    }

    #[test]
    fn test_restart_resets_clock() {
        let mut game = GameLoop::with_seed(3);
        game.advance(400);
        assert!(game.apply(GameAction::Restart));
        assert_eq!(game.state().episode_id(), 1);
        assert_eq!(game.remaining_ms(), Some(600));
    }

    #[test]
    fn test_gravity_locks_and_records_event() {
        let piece = Piece::at(PieceKind::S, 0, 17);
        let state =
            GameState::from_parts(Board::new(), piece, Piece::new(PieceKind::C), 0, 1);
        let mut game = GameLoop::new(state);

        assert!(game.advance(600));

        assert_eq!(game.state().board().filled_count(), 4);
        let event = game.drain_events().next().unwrap();
        assert_eq!(event.kind, PieceKind::S);
    }
}
