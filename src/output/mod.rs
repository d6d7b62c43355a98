//! Terminal output formatting
//!
//! Display utilities shared by the CLI frontends.

pub mod formatters;

pub use formatters::{format_row, palette_legend, score_pegs};
