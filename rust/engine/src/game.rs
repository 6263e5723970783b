use rand::Rng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardCell};
use crate::errors::GameError;
use crate::player::Player;
use crate::rules;
use crate::symbol::GameSymbol;

/// Lifecycle status of a game. `Finished` and `Drawn` are terminal: once
/// the status leaves `InProgress` it never changes again, and further calls
/// to [`Game::make_move`] fail fast.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are being accepted
    InProgress,
    /// Somebody completed a winning row
    Finished,
    /// Board filled with no winning row
    Drawn,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Orchestrates turn order, validates and applies moves, and tracks status
/// and winner. The only way to obtain a `Game` is through
/// [`crate::builder::GameBuilder`], which enforces the construction-time
/// invariants (exactly two players, unique symbols, board size >= 1).
///
/// # Examples
///
/// ```
/// use gridline_engine::builder::GameBuilder;
/// use gridline_engine::game::GameStatus;
/// use gridline_engine::player::{Player, ScriptedMoves};
/// use gridline_engine::symbol::GameSymbol;
///
/// let mut game = GameBuilder::new()
///     .with_size(3)
///     .with_player(Player::new(
///         GameSymbol::X,
///         Box::new(ScriptedMoves::new(vec![(0, 0), (0, 1), (0, 2)])),
///     ))
///     .with_player(Player::new(
///         GameSymbol::O,
///         Box::new(ScriptedMoves::new(vec![(1, 0), (1, 1)])),
///     ))
///     .build()
///     .unwrap();
///
/// game.start_from(0);
/// while !game.status().is_terminal() {
///     game.make_move().unwrap();
/// }
/// assert_eq!(game.status(), GameStatus::Finished);
/// assert_eq!(game.winner(), Some(GameSymbol::X));
/// ```
#[derive(Debug)]
pub struct Game {
    /// Grid owned exclusively by this game
    board: Board,
    /// Turn order, fixed at build time
    players: Vec<Player>,
    status: GameStatus,
    /// Index into `players` of the player to move next; always valid
    next_player_index: usize,
    /// Set exactly once, when the status becomes `Finished`
    winner: Option<GameSymbol>,
    /// `start()` / `start_from()` must run before the first move
    started: bool,
    rng: ChaCha20Rng,
}

impl Game {
    pub(crate) fn new(board: Board, players: Vec<Player>, rng: ChaCha20Rng) -> Self {
        Self {
            board,
            players,
            status: GameStatus::InProgress,
            next_player_index: 0,
            winner: None,
            started: false,
            rng,
        }
    }

    /// Select the first mover uniformly at random among the players and
    /// open the game for moves. The draw comes from the seeded ChaCha20 RNG
    /// configured at build time, so sessions are reproducible.
    pub fn start(&mut self) {
        self.next_player_index = self.rng.random_range(0..self.players.len());
        self.started = true;
    }

    /// Deterministic variant of [`Game::start`]: open the game with a
    /// chosen first mover. The index wraps modulo the player count.
    pub fn start_from(&mut self, index: usize) {
        self.next_player_index = index % self.players.len();
        self.started = true;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The winning symbol, set only when the status is `Finished`.
    pub fn winner(&self) -> Option<GameSymbol> {
        self.winner
    }

    pub fn next_player_index(&self) -> usize {
        self.next_player_index
    }

    /// Symbol of the player whose move is next.
    pub fn current_symbol(&self) -> GameSymbol {
        self.players[self.next_player_index].symbol()
    }

    /// Execute one turn: pull a move from the current player, validate it,
    /// apply it, update status, and advance turn order. Returns the applied
    /// move so drivers can display it.
    ///
    /// A winning move sets the status to `Finished` and the winner to the
    /// moving player without advancing the turn; filling the last cell with
    /// no winning row sets `Drawn`.
    ///
    /// # Errors
    ///
    /// - [`GameError::NotStarted`] before [`Game::start`] has run
    /// - [`GameError::GameOver`] once the status is terminal
    /// - [`GameError::InvalidMove`] when the target cell is occupied
    /// - [`GameError::OutOfBounds`] when the target lies outside the board
    /// - [`GameError::NoMoveAvailable`] when the strategy cannot produce
    ///   a move
    ///
    /// On any error the board and turn index are unchanged, so the driver
    /// may re-solicit a move from the same player.
    pub fn make_move(&mut self) -> Result<BoardCell, GameError> {
        if !self.started {
            return Err(GameError::NotStarted);
        }
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }

        let mv = self.next_move()?;
        // occupancy was validated; this write cannot fail on bounds either
        self.board.update(&mv)?;

        if rules::winning_row(&self.board, mv.symbol).is_some() {
            self.status = GameStatus::Finished;
            self.winner = Some(mv.symbol);
            return Ok(mv);
        }
        if rules::is_draw(&self.board) {
            self.status = GameStatus::Drawn;
            return Ok(mv);
        }

        self.next_player_index = (self.next_player_index + 1) % self.players.len();
        Ok(mv)
    }

    /// Pull a move from the current player and validate it against the
    /// board without applying it.
    fn next_move(&mut self) -> Result<BoardCell, GameError> {
        let board = &self.board;
        let player = &mut self.players[self.next_player_index];
        let mv = player.make_move(board)?;
        Self::validate_move(board, &mv)?;
        Ok(mv)
    }

    fn validate_move(board: &Board, mv: &BoardCell) -> Result<(), GameError> {
        // is_empty also promotes out-of-range targets to OutOfBounds
        if !board.is_empty(mv.row, mv.column)? {
            return Err(GameError::InvalidMove {
                row: mv.row,
                column: mv.column,
            });
        }
        Ok(())
    }
}
