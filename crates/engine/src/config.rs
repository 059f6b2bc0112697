//! Engine configuration.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::INPUT_THROTTLE_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Randomizer seed; `None` picks one from the system clock at mount
    pub seed: Option<u32>,
    /// Minimum spacing between throttled input commands
    pub throttle_ms: u32,
    /// JSON-lines event log destination
    pub log_path: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            throttle_ms: INPUT_THROTTLE_MS,
            log_path: None,
        }
    }
}

impl EngineConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let seed = env::var("WESM_TETRIS_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok());

        let throttle_ms = env::var("WESM_TETRIS_THROTTLE_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(INPUT_THROTTLE_MS);

        let log_path = env::var("WESM_TETRIS_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            throttle_ms,
            log_path,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The configured seed, or one derived from the current time
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}
