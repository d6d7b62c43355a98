//! Game engine
//!
//! Owns the hidden goal, the attempt history, and the in-progress guess for
//! one session, and exposes the synchronous query surface frontends render
//! from. Frontends never mutate state directly; they call `start`, `select`,
//! `deselect`, and `submit`, and re-read the queries afterwards.

mod config;
mod editor;
mod game;

pub use config::{ConfigError, GameConfig};
pub use editor::LineEditor;
pub use game::{Attempt, Game, GameStatus};
