//! Peg colors
//!
//! The game draws codes from a fixed, finite set of named colors. A palette
//! (the configured subset of `Color::ALL`) is chosen once at game
//! construction; colors have no ordering semantics beyond equality.

use std::fmt;

/// A code peg color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Green,
    Red,
    Yellow,
    Orange,
}

impl Color {
    /// Every color the game knows about, in display order
    pub const ALL: [Self; 5] = [
        Self::Blue,
        Self::Green,
        Self::Red,
        Self::Yellow,
        Self::Orange,
    ];

    /// Human-readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
        }
    }

    /// Single-letter key used by the terminal frontends
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Blue => 'b',
            Self::Green => 'g',
            Self::Red => 'r',
            Self::Yellow => 'y',
            Self::Orange => 'o',
        }
    }

    /// Parse a color from its key character (case-insensitive)
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// assert_eq!(Color::from_key('b'), Some(Color::Blue));
    /// assert_eq!(Color::from_key('Y'), Some(Color::Yellow));
    /// assert_eq!(Color::from_key('x'), None);
    /// ```
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'b' => Some(Self::Blue),
            'g' => Some(Self::Green),
            'r' => Some(Self::Red),
            'y' => Some(Self::Yellow),
            'o' => Some(Self::Orange),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
