//! Game configuration and construction-time errors.
//!
//! Everything here is checked once, before play starts. Nothing in the play
//! loop returns an error: illegal moves are rejected silently and game over is
//! a status, not a failure.

use std::fmt;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, DROP_INTERVAL_MS, SPAWN_X, SPAWN_Y};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroWidth,
    ZeroHeight,
    SpawnOutOfBounds,
    ZeroDropInterval,
    BoardSizeMismatch,
    EmptyShape,
    RaggedShape,
    ShapeTooLarge,
    InvalidShapeCell,
    EmptySequence,
}

impl ConfigError {
    pub fn code(self) -> &'static str {
        match self {
            ConfigError::ZeroWidth
            | ConfigError::ZeroHeight
            | ConfigError::BoardSizeMismatch => "invalid_dimensions",
            ConfigError::SpawnOutOfBounds => "invalid_spawn",
            ConfigError::ZeroDropInterval => "invalid_drop_interval",
            ConfigError::EmptyShape
            | ConfigError::RaggedShape
            | ConfigError::ShapeTooLarge
            | ConfigError::InvalidShapeCell => "invalid_shape",
            ConfigError::EmptySequence => "invalid_sequence",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ConfigError::ZeroWidth => "board width must be at least one column",
            ConfigError::ZeroHeight => "board height must be at least one row",
            ConfigError::SpawnOutOfBounds => "spawn column must lie inside the board",
            ConfigError::ZeroDropInterval => "drop interval must be greater than zero",
            ConfigError::BoardSizeMismatch => "board dimensions differ from the config",
            ConfigError::EmptyShape => "shape matrix has no rows or no columns",
            ConfigError::RaggedShape => "shape matrix rows differ in length",
            ConfigError::ShapeTooLarge => "shape matrix exceeds 4x4",
            ConfigError::InvalidShapeCell => "shape matrix cells must be 0 or 1",
            ConfigError::EmptySequence => "scripted shape sequence is empty",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for ConfigError {}

/// Board size, spawn origin and gravity interval for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    pub spawn_x: i16,
    pub spawn_y: i16,
    pub drop_interval_ms: u32,
}

impl GameConfig {
    /// Build a config with the default spawn origin and drop interval.
    pub fn with_size(width: u8, height: u8) -> Result<Self, ConfigError> {
        Self {
            width,
            height,
            ..Self::default()
        }
        .validated()
    }

    /// Check the config and hand it back unchanged.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        // Spawn rows above the board are allowed, same as for a falling piece.
        if self.spawn_x < 0
            || self.spawn_x >= self.width as i16
            || self.spawn_y >= self.height as i16
        {
            return Err(ConfigError::SpawnOutOfBounds);
        }
        if self.drop_interval_ms == 0 {
            return Err(ConfigError::ZeroDropInterval);
        }
        Ok(self)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,
            drop_interval_ms: DROP_INTERVAL_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.validated(), Ok(cfg));
        assert_eq!((cfg.width, cfg.height), (10, 20));
    }

    #[test]
    fn zero_dimensions_fail_fast() {
        assert_eq!(GameConfig::with_size(0, 20), Err(ConfigError::ZeroWidth));
        assert_eq!(GameConfig::with_size(10, 0), Err(ConfigError::ZeroHeight));
    }

    #[test]
    fn spawn_must_fit_horizontally() {
        // Default spawn column 4 does not fit a 4-wide board.
        assert_eq!(
            GameConfig::with_size(4, 20),
            Err(ConfigError::SpawnOutOfBounds)
        );
        let above = GameConfig {
            spawn_y: -2,
            ..GameConfig::default()
        };
        assert!(above.validated().is_ok());
    }

    #[test]
    fn zero_drop_interval_rejected() {
        let cfg = GameConfig {
            drop_interval_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(cfg.validated(), Err(ConfigError::ZeroDropInterval));
    }

    #[test]
    fn error_display_includes_code_and_message() {
        let s = ConfigError::RaggedShape.to_string();
        assert!(s.starts_with("invalid_shape: "));
        assert!(s.contains("differ in length"));
    }
}
