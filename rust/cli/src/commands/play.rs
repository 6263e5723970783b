//! # Play Command
//!
//! Interactive gridline gameplay: a human against a bot, or two bots
//! against each other.
//!
//! The human plays as `X` against the baseline bot. Moves are entered as
//! `ROW COL` (0-based); `q` or EOF leaves the session. Rejected moves
//! (occupied cell, off the board) leave the game untouched and re-prompt
//! the same player, which is exactly the engine's retry contract.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::rc::Rc;

use gridline_ai::create_bot;
use gridline_engine::board::{Board, BoardCell};
use gridline_engine::builder::{GameBuilder, DEFAULT_BOARD_SIZE};
use gridline_engine::errors::GameError;
use gridline_engine::player::{MoveStrategy, Player};
use gridline_engine::symbol::GameSymbol;

use crate::cli::Vs;
use crate::error::CliError;
use crate::formatters::{format_board, format_outcome};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_move_input, ParseResult};

/// Hand-off slot between the prompt loop and the human player's strategy
/// inside the game. The loop parses a coordinate and pushes it here; the
/// strategy pops it when the game asks the player to move. This keeps input
/// collection in the driver while the engine still pulls every move through
/// its player, single-threaded by design.
#[derive(Debug, Clone, Default)]
struct InputQueue(Rc<RefCell<VecDeque<(usize, usize)>>>);

impl InputQueue {
    fn new() -> Self {
        Self::default()
    }

    fn push(&self, row: usize, column: usize) {
        self.0.borrow_mut().push_back((row, column));
    }
}

/// Human-backed strategy fed by an [`InputQueue`].
#[derive(Debug)]
struct HumanInput {
    queue: InputQueue,
}

impl MoveStrategy for HumanInput {
    fn choose_move(&mut self, _board: &Board, symbol: GameSymbol) -> Result<BoardCell, GameError> {
        let (row, column) = self
            .queue
            .0
            .borrow_mut()
            .pop_front()
            .ok_or(GameError::NoMoveAvailable)?;
        Ok(BoardCell {
            row,
            column,
            symbol,
        })
    }

    fn name(&self) -> &str {
        "human"
    }
}

/// Handle the play command: interactive gridline gameplay.
///
/// # Arguments
///
/// * `vs` - Opponent mode (human vs bot, or bot vs bot)
/// * `size` - Board size (default: 3)
/// * `seed` - RNG seed for reproducibility (default: random)
/// * `games` - Number of games to play (must be >= 1, default: 1)
/// * `out` - Output stream for game display
/// * `err` - Error stream for warnings and rejected moves
/// * `stdin` - Input stream for human moves
///
/// # Errors
///
/// Returns `CliError::InvalidInput` for `games == 0`, `CliError::Engine`
/// for unrecoverable engine failures, `CliError::Io` for stream failures.
pub fn handle_play_command(
    vs: Vs,
    size: Option<usize>,
    seed: Option<u64>,
    games: Option<u32>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let games = games.unwrap_or(1);
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let size = size.unwrap_or(DEFAULT_BOARD_SIZE);
    let seed = seed.unwrap_or_else(rand::random);

    writeln!(
        out,
        "play: vs={} size={} games={} seed={}",
        vs.as_str(),
        size,
        games,
        seed
    )?;

    let mut played = 0u32;
    let mut quit_requested = false;

    for game_no in 1..=games {
        if quit_requested {
            break;
        }
        writeln!(out, "Game {}", game_no)?;
        // per-game seed keeps multi-game sessions reproducible as a whole
        let game_seed = seed.wrapping_add(u64::from(game_no - 1));

        match vs {
            Vs::Human => {
                quit_requested = play_human_game(size, game_seed, stdin, out, err)?;
                if !quit_requested {
                    played += 1;
                }
            }
            Vs::Bot => {
                play_bot_game(size, game_seed, out)?;
                played += 1;
            }
        }
    }

    writeln!(out, "Session games={}", games)?;
    writeln!(out, "Games played: {}", played)?;
    Ok(())
}

/// Run one human-vs-bot game. Returns `true` when the human asked to quit
/// (or input reached EOF) before the game ended.
fn play_human_game(
    size: usize,
    seed: u64,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<bool, CliError> {
    let queue = InputQueue::new();
    let mut game = GameBuilder::new()
        .with_size(size)
        .with_seed(seed)
        .with_player(Player::new(
            GameSymbol::X,
            Box::new(HumanInput {
                queue: queue.clone(),
            }),
        ))
        .with_player(Player::new(GameSymbol::O, create_bot("baseline", Some(seed))))
        .build()?;
    game.start();

    writeln!(out, "You are X; {} moves first", game.current_symbol())?;

    loop {
        if game.current_symbol() == GameSymbol::X {
            write!(out, "{}", format_board(game.board()))?;
            write!(out, "Your move (ROW COL, q to quit): ")?;
            out.flush()?;

            let Some(line) = read_stdin_line(stdin) else {
                return Ok(true);
            };
            match parse_move_input(&line) {
                ParseResult::Quit => return Ok(true),
                ParseResult::Invalid(msg) => {
                    ui::write_error(err, &msg)?;
                    continue;
                }
                ParseResult::Move(row, column) => queue.push(row, column),
            }
        }

        match game.make_move() {
            Ok(mv) => {
                writeln!(out, "{} plays ({}, {})", mv.symbol, mv.row, mv.column)?;
            }
            Err(e @ (GameError::InvalidMove { .. } | GameError::OutOfBounds { .. })) => {
                // board and turn untouched; same player is re-prompted
                ui::write_error(err, &e.to_string())?;
                continue;
            }
            Err(e) => return Err(e.into()),
        }

        if game.status().is_terminal() {
            write!(out, "{}", format_board(game.board()))?;
            writeln!(out, "{}", format_outcome(game.status(), game.winner()))?;
            return Ok(false);
        }
    }
}

/// Run one bot-vs-bot game, printing every move and the outcome.
fn play_bot_game(size: usize, seed: u64, out: &mut dyn Write) -> Result<(), CliError> {
    let mut game = GameBuilder::new()
        .with_size(size)
        .with_seed(seed)
        .with_player(Player::new(GameSymbol::X, create_bot("baseline", Some(seed))))
        .with_player(Player::new(
            GameSymbol::O,
            create_bot("random", Some(seed.wrapping_add(1))),
        ))
        .build()?;
    game.start();

    while !game.status().is_terminal() {
        let mv = game.make_move()?;
        writeln!(out, "{} plays ({}, {})", mv.symbol, mv.row, mv.column)?;
    }
    write!(out, "{}", format_board(game.board()))?;
    writeln!(out, "{}", format_outcome(game.status(), game.winner()))?;
    Ok(())
}
