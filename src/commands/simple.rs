//! Simple interactive CLI mode
//!
//! Text-based play without the TUI: guesses are typed as key letters and the
//! board is echoed line by line.

use crate::core::Color;
use crate::engine::{Game, GameConfig, GameStatus};
use crate::output::{format_row, palette_legend, score_pegs};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple line-based mode
///
/// # Errors
///
/// Returns an error if reading user input or flushing stdout fails.
pub fn run_simple(config: GameConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Mastermind - Code Breaker                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "I picked a secret code of {} colored pegs. You have {} attempts.",
        config.code_length(),
        config.max_attempts()
    );
    println!("After each guess you get key pegs:\n");
    println!("  ● right color, right position");
    println!("  ○ right color, wrong position\n");
    println!("Colors: {}", palette_legend(config.palette()));
    println!(
        "Type a guess as {} letters (e.g. '{}').",
        config.code_length(),
        example_guess(&config)
    );
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut game = Game::new(config);
    game.start();

    loop {
        let turn = game.attempts_committed() + 1;
        let prompt = format!("Attempt {turn}/{}", game.max_attempts());

        let input = get_user_input(&prompt)?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game.start();
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        let Some(guess) = parse_guess(&input, game.code_length()) else {
            println!(
                "❌ Enter exactly {} of: {}\n",
                game.code_length(),
                palette_legend(game.palette())
            );
            continue;
        };

        for color in guess {
            game.select(color);
        }
        let row = game.attempts_committed();
        game.submit();

        println!(
            "   {}   {}\n",
            format_row(&game.attempt(row)),
            score_pegs(game.score(row), game.code_length())
        );

        match game.status() {
            GameStatus::Won => {
                print_win_banner(&game);
                if !ask_play_again()? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                game.start();
                println!("\n🔄 New game started!\n");
            }
            GameStatus::Lost => {
                println!("\n{}", "═".repeat(62).bright_red());
                println!("{}", "  💥 Out of attempts!".bright_red().bold());
                println!(
                    "  The code was:  {}",
                    format_row(&goal_row(&game))
                );
                println!("{}\n", "═".repeat(62).bright_red());
                if !ask_play_again()? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                game.start();
                println!("\n🔄 New game started!\n");
            }
            GameStatus::InProgress | GameStatus::Idle => {}
        }
    }
}

fn print_win_banner(game: &Game) {
    let attempts = game.attempts_committed();

    println!("\n{}", "═".repeat(62).bright_cyan());
    println!(
        "{}",
        "    🎉 ✨  C O D E   B R O K E N !  ✨ 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(62).bright_cyan());

    let performance = match attempts {
        1 => "🏆 First try! Incredible!",
        2 => "⭐ Two attempts! Outstanding!",
        3 => "💫 Three attempts! Very sharp!",
        4 => "✨ Four attempts! Nice work!",
        _ => "✓ Got there!",
    };
    println!("\n  {}", performance.bright_yellow().bold());
    println!(
        "\n  Solved in {} {}",
        attempts.to_string().bright_cyan().bold(),
        if attempts == 1 { "attempt" } else { "attempts" }
    );

    println!("\n  Guess history:");
    for (i, attempt) in game.attempts().iter().enumerate() {
        let row: Vec<Option<Color>> = attempt.guess().iter().copied().map(Some).collect();
        println!(
            "    {}. {}   {}",
            (i + 1).to_string().bright_black(),
            format_row(&row),
            score_pegs(attempt.score(), game.code_length())
        );
    }

    println!("\n{}\n", "═".repeat(62).bright_cyan());
}

fn goal_row(game: &Game) -> Vec<Option<Color>> {
    game.goal().iter().copied().map(Some).collect()
}

fn ask_play_again() -> Result<bool, String> {
    Ok(matches!(
        get_user_input("Play again? (yes/no)")?.to_lowercase().as_str(),
        "yes" | "y"
    ))
}

/// Parse a typed guess; `None` unless it is exactly `code_length` valid keys
fn parse_guess(input: &str, code_length: usize) -> Option<Vec<Color>> {
    let colors: Option<Vec<Color>> = input.chars().map(Color::from_key).collect();
    colors.filter(|guess| guess.len() == code_length)
}

/// First letters of the palette cycled up to the code length, for the help text
fn example_guess(config: &GameConfig) -> String {
    config
        .palette()
        .iter()
        .cycle()
        .take(config.code_length())
        .map(|color| color.key())
        .collect()
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
