//! Mastermind - CLI
//!
//! Code-breaking game with TUI and plain line modes.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::run_simple,
    core::Color,
    engine::GameConfig,
    interactive::{App, run_tui},
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game: guess the hidden color sequence",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Length of the hidden code
    #[arg(short = 'l', long, global = true, default_value_t = 4)]
    length: usize,

    /// Number of attempts before the game is lost
    #[arg(short = 'a', long, global = true, default_value_t = 6)]
    attempts: usize,

    /// Palette size: play with the first N of the 5 colors
    #[arg(short = 'c', long, global = true, default_value_t = 5)]
    colors: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based CLI mode
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.colors == 0 || cli.colors > Color::ALL.len() {
        bail!("palette size must be between 1 and {}", Color::ALL.len());
    }
    let palette = Color::ALL[..cli.colors].to_vec();
    let config = GameConfig::new(cli.length, cli.attempts, palette)?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(config)),
        Commands::Simple => run_simple(config).map_err(|e| anyhow::anyhow!(e)),
    }
}
