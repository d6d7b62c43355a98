//! Game configuration
//!
//! All tunables are fixed at construction: code length, attempt limit, and
//! the palette of colors the goal is drawn from. Validation happens here and
//! nowhere else; once a `GameConfig` exists the engine can rely on it.

use crate::core::Color;
use std::fmt;

/// Validated game parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    code_length: usize,
    max_attempts: usize,
    palette: Vec<Color>,
}

/// Error type for invalid configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Code length must be at least 1
    ZeroCodeLength,
    /// Attempt limit must be at least 1
    ZeroMaxAttempts,
    /// The palette must contain at least one color
    EmptyPalette,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCodeLength => write!(f, "code length must be positive"),
            Self::ZeroMaxAttempts => write!(f, "attempt limit must be positive"),
            Self::EmptyPalette => write!(f, "palette must contain at least one color"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Create a validated configuration
    ///
    /// Duplicate palette entries are dropped, keeping first occurrence, so
    /// the palette behaves as a set.
    ///
    /// # Errors
    /// Returns `ConfigError` if `code_length` or `max_attempts` is zero, or
    /// if the palette is empty.
    ///
    /// # Examples
    /// ```
    /// use mastermind::engine::GameConfig;
    /// use mastermind::core::Color;
    ///
    /// let config = GameConfig::new(4, 6, Color::ALL.to_vec()).unwrap();
    /// assert_eq!(config.code_length(), 4);
    ///
    /// assert!(GameConfig::new(0, 6, Color::ALL.to_vec()).is_err());
    /// ```
    pub fn new(
        code_length: usize,
        max_attempts: usize,
        palette: Vec<Color>,
    ) -> Result<Self, ConfigError> {
        if code_length == 0 {
            return Err(ConfigError::ZeroCodeLength);
        }
        if max_attempts == 0 {
            return Err(ConfigError::ZeroMaxAttempts);
        }

        let mut deduped: Vec<Color> = Vec::with_capacity(palette.len());
        for color in palette {
            if !deduped.contains(&color) {
                deduped.push(color);
            }
        }
        if deduped.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        Ok(Self {
            code_length,
            max_attempts,
            palette: deduped,
        })
    }

    /// Length of the hidden code
    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    /// Maximum number of committed attempts before the game is lost
    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Colors the goal is drawn from
    #[inline]
    #[must_use]
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }
}

impl Default for GameConfig {
    /// The classic board: 4 pegs, 6 attempts, 5 colors
    fn default() -> Self {
        Self {
            code_length: 4,
            max_attempts: 6,
            palette: Color::ALL.to_vec(),
        }
    }
}
