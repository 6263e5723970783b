//! Command-line argument definitions for the gridline binary.

use clap::{Parser, Subcommand, ValueEnum};

/// Opponent type for the `play` command.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Vs {
    /// Human enters moves interactively; the opponent is a bot.
    Human,
    /// Two bots play each other.
    Bot,
}

impl Vs {
    /// String representation of the opponent type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridline_cli::cli::Vs;
    /// assert_eq!(Vs::Bot.as_str(), "bot");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Vs::Human => "human",
            Vs::Bot => "bot",
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "gridline",
    version,
    about = "Gridline: a turn-based grid game with the row-line win rule"
)]
pub struct GridlineCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play games interactively or watch two bots
    Play {
        /// Opponent mode: human vs bot, or bot vs bot
        #[arg(long, value_enum)]
        vs: Vs,
        /// Board size N for an N x N grid (default: 3)
        #[arg(long)]
        size: Option<usize>,
        /// RNG seed for reproducible sessions
        #[arg(long)]
        seed: Option<u64>,
        /// Number of games to play (default: 1)
        #[arg(long)]
        games: Option<u32>,
    },
    /// Simulate bot-vs-bot games and report outcomes
    Sim {
        /// Number of games to simulate
        #[arg(long)]
        games: u32,
        /// Board size N for an N x N grid (default: 3)
        #[arg(long)]
        size: Option<usize>,
        /// RNG seed for reproducible simulations
        #[arg(long)]
        seed: Option<u64>,
        /// Write a JSONL match history to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Inspect RNG determinism for a seed
    Rng {
        /// Seed value (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}
