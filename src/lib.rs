//! Mastermind
//!
//! A Mastermind-style code-breaking game: a hidden sequence of colored pegs
//! is drawn at random, the player builds guesses one peg at a time, and each
//! committed guess is scored by exact and color-only matches. The engine is
//! a pure, synchronous state machine; the terminal frontends are thin
//! collaborators over its query surface.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::Color;
//! use mastermind::engine::{Game, GameConfig, GameStatus};
//!
//! let mut game = Game::new(GameConfig::default());
//! game.start();
//!
//! for color in [Color::Blue, Color::Green, Color::Red, Color::Yellow] {
//!     game.select(color);
//! }
//! game.submit();
//!
//! assert_eq!(game.attempts_committed(), 1);
//! assert!(matches!(game.status(), GameStatus::InProgress | GameStatus::Won));
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod engine;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
