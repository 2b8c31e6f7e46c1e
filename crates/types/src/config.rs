//! Game configuration, read from `BLOCKFALL_*` environment variables.

use thiserror::Error;

use crate::{ARENA_HEIGHT, ARENA_WIDTH, DROP_INTERVAL_MS, TICK_MS};

/// Smallest arena side that still fits the 4x4 I piece.
pub const MIN_ARENA_SIDE: u8 = 4;

/// Largest supported arena side.
pub const MAX_ARENA_SIDE: u8 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("arena width {0} is outside 4..=64")]
    ArenaWidth(u8),
    #[error("arena height {0} is outside 4..=64")]
    ArenaHeight(u8),
    #[error("drop interval must be non-zero")]
    ZeroDropInterval,
    #[error("tick interval must be non-zero")]
    ZeroTick,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub arena_width: u8,
    pub arena_height: u8,
    pub drop_interval_ms: u32,
    pub tick_ms: u32,
    /// Piece RNG seed; `None` lets the host pick one.
    pub seed: Option<u32>,
    /// Where to write the trace log; `None` disables logging.
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            drop_interval_ms: DROP_INTERVAL_MS,
            tick_ms: TICK_MS,
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Read configuration from the process environment.
    ///
    /// - `BLOCKFALL_ARENA_WIDTH` / `BLOCKFALL_ARENA_HEIGHT`
    /// - `BLOCKFALL_DROP_MS` / `BLOCKFALL_TICK_MS`
    /// - `BLOCKFALL_SEED`
    /// - `BLOCKFALL_LOG_PATH`
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`], with an explicit variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let arena_width = lookup("BLOCKFALL_ARENA_WIDTH")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.arena_width);
        let arena_height = lookup("BLOCKFALL_ARENA_HEIGHT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.arena_height);
        let drop_interval_ms = lookup("BLOCKFALL_DROP_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.drop_interval_ms);
        let tick_ms = lookup("BLOCKFALL_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.tick_ms);
        let seed = lookup("BLOCKFALL_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            arena_width,
            arena_height,
            drop_interval_ms,
            tick_ms,
            seed,
            log_path,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_ARENA_SIDE..=MAX_ARENA_SIDE).contains(&self.arena_width) {
            return Err(ConfigError::ArenaWidth(self.arena_width));
        }
        if !(MIN_ARENA_SIDE..=MAX_ARENA_SIDE).contains(&self.arena_height) {
            return Err(ConfigError::ArenaHeight(self.arena_height));
        }
        if self.drop_interval_ms == 0 {
            return Err(ConfigError::ZeroDropInterval);
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }
}
