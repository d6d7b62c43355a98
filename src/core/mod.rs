//! Core domain types for the code-breaking game
//!
//! This module contains the fundamental domain types with no I/O and no game
//! state. All types here are pure, testable, and have clear mathematical
//! properties.

mod color;
mod score;

pub use color::Color;
pub use score::{Score, ScoreError};
