//! Input adapter: mapping plus throttling in one place.
//!
//! Time is passed in by the caller so hosts and tests share one clock.

use crossterm::event::KeyEvent;

use crate::map::{map_button, map_key, ButtonCommand, DirectionalButton};
use crate::throttle::InputThrottle;
use crate::types::GameAction;

#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    throttle: InputThrottle,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_throttle_ms(throttle_ms: u64) -> Self {
        Self {
            throttle: InputThrottle::new(throttle_ms),
        }
    }

    /// Turn a key press into a command, or `None` if it is unmapped or
    /// throttled. Only mapped keys count toward the throttle; unmapped keys
    /// and Enter during play leave it alone.
    pub fn handle_key(&mut self, key: KeyEvent, now_ms: u64, game_over: bool) -> Option<GameAction> {
        let action = map_key(key, game_over)?;
        self.throttle.accept(action, now_ms).then_some(action)
    }

    /// Same as [`handle_key`](Self::handle_key) for on-screen buttons.
    /// Leaving is never throttled.
    pub fn handle_button(&mut self, button: DirectionalButton, now_ms: u64) -> Option<ButtonCommand> {
        match map_button(button) {
            ButtonCommand::Game(action) => self
                .throttle
                .accept(action, now_ms)
                .then_some(ButtonCommand::Game(action)),
            ButtonCommand::Leave => Some(ButtonCommand::Leave),
        }
    }

    /// Throttle an action that is already mapped
    pub fn accept(&mut self, action: GameAction, now_ms: u64) -> bool {
        self.throttle.accept(action, now_ms)
    }
}
