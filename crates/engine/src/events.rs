//! Event log - optional JSON-lines record of what happened in a session.
//!
//! Records are sent over an unbounded channel to a writer task that appends
//! one JSON object per line. The writer gives up on the first I/O error.

use serde::Serialize;
use tokio::sync::mpsc;

use crate::core::GameState;
use crate::types::LockEvent;

/// One line of the event log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineEvent {
    Mounted {
        ts: u64,
        seed: u32,
    },
    Lock {
        ts: u64,
        episode_id: u32,
        piece: char,
        lines_cleared: u32,
        points: u32,
        score: u32,
        lines: u32,
        level: u32,
        level_up: bool,
    },
    GameOver {
        ts: u64,
        episode_id: u32,
        score: u32,
        lines: u32,
        level: u32,
    },
    Restart {
        ts: u64,
        episode_id: u32,
    },
    Unmounted {
        ts: u64,
        score: u32,
    },
}

impl EngineEvent {
    pub fn mounted(seed: u32) -> Self {
        EngineEvent::Mounted {
            ts: current_timestamp_ms(),
            seed,
        }
    }

    pub fn lock(event: &LockEvent, state: &GameState) -> Self {
        EngineEvent::Lock {
            ts: current_timestamp_ms(),
            episode_id: state.episode_id(),
            piece: event.kind.as_char(),
            lines_cleared: event.lines_cleared,
            points: event.line_clear_score,
            score: state.score(),
            lines: state.lines(),
            level: event.level,
            level_up: event.level_up,
        }
    }

    pub fn game_over(state: &GameState) -> Self {
        EngineEvent::GameOver {
            ts: current_timestamp_ms(),
            episode_id: state.episode_id(),
            score: state.score(),
            lines: state.lines(),
            level: state.level(),
        }
    }

    pub fn restart(state: &GameState) -> Self {
        EngineEvent::Restart {
            ts: current_timestamp_ms(),
            episode_id: state.episode_id(),
        }
    }

    pub fn unmounted(state: &GameState) -> Self {
        EngineEvent::Unmounted {
            ts: current_timestamp_ms(),
            score: state.score(),
        }
    }
}

/// Sending half of the event log
#[derive(Debug, Clone)]
pub struct EventLog {
    tx: mpsc::UnboundedSender<EngineEvent>,
}

impl EventLog {
    /// Spawn the writer task. Must be called inside a tokio runtime.
    pub fn spawn(path: String) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<EngineEvent>();
        tokio::spawn(async move {
            use tokio::fs::OpenOptions;
            use tokio::io::AsyncWriteExt;

            let mut file = match OpenOptions::new().create(true).append(true).open(&path).await {
                Ok(f) => f,
                Err(_) => return,
            };

            let mut buf: Vec<u8> = Vec::with_capacity(512);

            while let Some(event) = rx.recv().await {
                buf.clear();
                if serde_json::to_writer(&mut buf, &event).is_err() {
                    continue;
                }
                buf.push(b'\n');
                if file.write_all(&buf).await.is_err() {
                    break;
                }
            }

            let _ = file.flush().await;
        });
        Self { tx }
    }

    /// Spawn a writer only when a path is configured
    pub fn from_path(path: Option<String>) -> Option<Self> {
        path.map(Self::spawn)
    }

    pub fn record(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Get current timestamp in milliseconds
fn current_timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
