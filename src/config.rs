use std::time::Duration;

use thiserror::Error;

/// Period of the simulation timer. Fixed: the game has no speed setting.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cell size must be at least 1")]
    ZeroCellSize,
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Surface pixels (terminal characters) per grid cell, on both axes
    pub cell_size: u16,
    /// Seed for food placement; random when unset
    pub seed: Option<u64>,
    /// Show head and food coordinates in the top-left corner
    pub debug_overlay: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { cell_size: 1, seed: None, debug_overlay: false }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        Ok(())
    }
}
