use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cell size must be non-zero")]
    ZeroCellSize,
    #[error("screen {width}x{height} does not divide into {cell_size}px cells")]
    UnalignedScreen { width: i32, height: i32, cell_size: i32 },
    #[error("initial snake length must be non-zero")]
    ZeroLength,
}

/// Board geometry and pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in pixels
    pub screen_width: i32,
    /// Board height in pixels
    pub screen_height: i32,
    /// Side of one grid cell in pixels
    pub cell_size: i32,
    pub initial_body_parts: usize,
    /// Delay between ticks in milliseconds
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 600,
            screen_height: 600,
            cell_size: 25,
            initial_body_parts: 6,
            tick_ms: 75,
        }
    }
}

impl GameConfig {
    pub fn cols(&self) -> i32 {
        self.screen_width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.screen_height / self.cell_size
    }

    /// Tick delay in seconds, as macroquad measures frame time.
    pub fn tick_interval(&self) -> f32 {
        self.tick_ms as f32 / 1000.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size <= 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.screen_width <= 0
            || self.screen_height <= 0
            || self.screen_width % self.cell_size != 0
            || self.screen_height % self.cell_size != 0
        {
            return Err(ConfigError::UnalignedScreen {
                width: self.screen_width,
                height: self.screen_height,
                cell_size: self.cell_size,
            });
        }
        if self.initial_body_parts == 0 {
            return Err(ConfigError::ZeroLength);
        }
        Ok(())
    }
}
