//! # Sim Command
//!
//! Batch bot-vs-bot simulation. Runs a configured number of games with
//! seeded random bots, tallies outcomes per symbol, and optionally writes a
//! JSONL match history for later inspection or replay.

use std::io::Write;
use std::path::Path;

use gridline_ai::create_bot;
use gridline_engine::builder::{GameBuilder, DEFAULT_BOARD_SIZE};
use gridline_engine::game::GameStatus;
use gridline_engine::logger::{MatchLogger, MatchRecord, MoveRecord};
use gridline_engine::player::Player;
use gridline_engine::symbol::GameSymbol;

use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;

/// Handle the sim command: run bot-vs-bot games and report outcomes.
///
/// # Arguments
///
/// * `games` - Number of games to simulate (must be >= 1)
/// * `size` - Board size (default: 3)
/// * `seed` - Base RNG seed; game `i` derives its seed from it, so a whole
///   run is reproducible from one value
/// * `output` - Optional JSONL match-history path
/// * `out` - Output stream for the summary
/// * `err` - Error stream
///
/// # Errors
///
/// Returns `CliError::InvalidInput` for `games == 0` or an unusable output
/// path, `CliError::Io` when the history file cannot be written,
/// `CliError::Engine` for engine failures.
pub fn handle_sim_command(
    games: u32,
    size: Option<usize>,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let size = size.unwrap_or(DEFAULT_BOARD_SIZE);
    let seed = seed.unwrap_or_else(rand::random);

    writeln!(out, "sim: games={} size={} seed={}", games, size, seed)?;

    let mut logger = match &output {
        Some(path) => {
            ensure_parent_dir(Path::new(path)).map_err(CliError::InvalidInput)?;
            if Path::new(path).exists() {
                ui::display_warning(err, &format!("overwriting history file {}", path))?;
            }
            Some(MatchLogger::create(path)?)
        }
        None => None,
    };

    let mut x_wins = 0u32;
    let mut o_wins = 0u32;
    let mut draws = 0u32;

    for game_no in 0..games {
        let game_seed = seed.wrapping_add(u64::from(game_no));
        let (status, winner, moves) = run_one_game(size, game_seed)?;

        match winner {
            Some(s) if s == GameSymbol::X => x_wins += 1,
            Some(_) => o_wins += 1,
            None => draws += 1,
        }

        if let Some(logger) = &mut logger {
            let record = MatchRecord {
                match_id: logger.next_id(),
                seed: Some(game_seed),
                size,
                moves,
                status,
                winner,
                ts: None,
                meta: None,
            };
            logger.write(&record)?;
        }
    }

    writeln!(out, "Games: {}", games)?;
    writeln!(out, "X wins: {}", x_wins)?;
    writeln!(out, "O wins: {}", o_wins)?;
    writeln!(out, "Draws: {}", draws)?;
    if let Some(path) = &output {
        writeln!(out, "History: {}", path)?;
    }
    Ok(())
}

/// Play one seeded random-vs-random game to completion, collecting the
/// applied moves in order.
fn run_one_game(
    size: usize,
    seed: u64,
) -> Result<(GameStatus, Option<GameSymbol>, Vec<MoveRecord>), CliError> {
    let mut game = GameBuilder::new()
        .with_size(size)
        .with_seed(seed)
        .with_player(Player::new(
            GameSymbol::X,
            create_bot("random", Some(seed.wrapping_add(1))),
        ))
        .with_player(Player::new(
            GameSymbol::O,
            create_bot("random", Some(seed.wrapping_add(2))),
        ))
        .build()?;
    game.start();

    let mut moves = Vec::new();
    while !game.status().is_terminal() {
        let mv = game.make_move()?;
        moves.push(MoveRecord {
            turn: moves.len(),
            symbol: mv.symbol,
            row: mv.row,
            column: mv.column,
        });
    }
    Ok((game.status(), game.winner(), moves))
}
