//! Formatting utilities for terminal output

use crate::core::{Color, Score};
use colored::Colorize;

/// Plain peg character for a board slot
#[must_use]
pub const fn peg_char(slot: Option<Color>) -> char {
    match slot {
        Some(_) => '●',
        None => '·',
    }
}

/// Map a peg color to its terminal color
#[must_use]
pub const fn ansi_color(color: Color) -> colored::Color {
    match color {
        Color::Blue => colored::Color::Blue,
        Color::Green => colored::Color::Green,
        Color::Red => colored::Color::Red,
        Color::Yellow => colored::Color::Yellow,
        // No basic ANSI orange; approximate with a truecolor value
        Color::Orange => colored::Color::TrueColor {
            r: 255,
            g: 140,
            b: 0,
        },
    }
}

/// Render a board row as colored pegs separated by spaces
#[must_use]
pub fn format_row(row: &[Option<Color>]) -> String {
    row.iter()
        .map(|&slot| match slot {
            Some(color) => peg_char(slot).to_string().color(ansi_color(color)).to_string(),
            None => peg_char(slot).to_string().bright_black().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render feedback as key pegs: `●` per exact match, `○` per color match,
/// `·` padding up to the code length
#[must_use]
pub fn score_pegs(score: Score, code_length: usize) -> String {
    let exact = score.exact();
    let color = score.color();
    let blank = code_length.saturating_sub(exact + color);

    let mut pegs = String::new();
    pegs.push_str(&"●".repeat(exact));
    pegs.push_str(&"○".repeat(color));
    pegs.push_str(&"·".repeat(blank));
    pegs
}

/// One-line summary of the palette with its key bindings
#[must_use]
pub fn palette_legend(palette: &[Color]) -> String {
    palette
        .iter()
        .map(|color| format!("{}={}", color.key(), color.name()))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peg_char_distinguishes_filled_and_empty() {
        assert_eq!(peg_char(Some(Color::Red)), '●');
        assert_eq!(peg_char(None), '·');
    }

    #[test]
    fn score_pegs_orders_exact_then_color() {
        assert_eq!(score_pegs(Score::new(1, 2), 4), "●○○·");
        assert_eq!(score_pegs(Score::new(4, 0), 4), "●●●●");
        assert_eq!(score_pegs(Score::ZERO, 4), "····");
    }

    #[test]
    fn score_pegs_never_underflows_padding() {
        // Degenerate score wider than the row still renders
        assert_eq!(score_pegs(Score::new(3, 3), 4), "●●●○○○");
    }

    #[test]
    fn palette_legend_lists_keys() {
        let legend = palette_legend(&[Color::Blue, Color::Red]);
        assert_eq!(legend, "b=blue  r=red");
    }

    #[test]
    fn ansi_color_mapping_is_stable() {
        assert_eq!(ansi_color(Color::Blue), colored::Color::Blue);
        assert_eq!(ansi_color(Color::Yellow), colored::Color::Yellow);
        assert!(matches!(
            ansi_color(Color::Orange),
            colored::Color::TrueColor { .. }
        ));
    }
}
