use crate::types::{GameAction, INPUT_THROTTLE_MS};

/// Minimum spacing between throttled commands.
///
/// Move-down and hard-drop always pass, but still count as the most recent
/// accepted command.
#[derive(Debug, Clone)]
pub struct InputThrottle {
    window_ms: u64,
    last_accepted_ms: Option<u64>,
}

impl InputThrottle {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_accepted_ms: None,
        }
    }

    /// Decide whether `action` issued at `now_ms` goes through.
    pub fn accept(&mut self, action: GameAction, now_ms: u64) -> bool {
        if action.is_throttled() {
            if let Some(last) = self.last_accepted_ms {
                if now_ms.saturating_sub(last) < self.window_ms {
                    return false;
                }
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }
}

impl Default for InputThrottle {
    fn default() -> Self {
        Self::new(INPUT_THROTTLE_MS as u64)
    }
}
