use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::board::Board;
use crate::errors::GameError;
use crate::game::Game;
use crate::player::Player;
use crate::symbol::GameSymbol;

/// Number of players a game requires.
pub const PLAYER_COUNT: usize = 2;

/// Board size used when the caller does not configure one.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Validating factory for [`Game`]: the only path to a valid game instance.
///
/// Collects a board size, a roster of players (append order = turn order)
/// and an optional RNG seed, then checks the construction-time invariants
/// in [`GameBuilder::build`]. The built game still needs
/// [`Game::start`] (or [`Game::start_from`]) before the first move.
///
/// # Examples
///
/// ```
/// use gridline_engine::builder::GameBuilder;
/// use gridline_engine::player::{Player, ScriptedMoves};
/// use gridline_engine::symbol::GameSymbol;
///
/// let game = GameBuilder::new()
///     .with_size(3)
///     .with_seed(42)
///     .with_player(Player::new(GameSymbol::X, Box::new(ScriptedMoves::new(vec![]))))
///     .with_player(Player::new(GameSymbol::O, Box::new(ScriptedMoves::new(vec![]))))
///     .build()
///     .unwrap();
/// assert_eq!(game.board().size(), 3);
/// assert_eq!(game.next_player_index(), 0);
/// ```
#[derive(Debug, Default)]
pub struct GameBuilder {
    size: Option<usize>,
    players: Vec<Player>,
    seed: Option<u64>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board dimensions, replacing any previously configured size.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Append a player to the pending roster. Append order is turn order.
    pub fn with_player(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    /// Seed for the game's RNG (first-mover selection). Without a seed the
    /// game is seeded from the thread RNG.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the pending configuration and produce a game.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidPlayers`] when the roster size differs from
    ///   [`PLAYER_COUNT`] or two players share a symbol
    /// - [`GameError::InvalidBoardSize`] when a zero board size was
    ///   configured
    pub fn build(self) -> Result<Game, GameError> {
        let size = self.size.unwrap_or(DEFAULT_BOARD_SIZE);
        if size == 0 {
            return Err(GameError::InvalidBoardSize { size });
        }
        if self.players.len() != PLAYER_COUNT {
            return Err(GameError::InvalidPlayers {
                expected: PLAYER_COUNT,
            });
        }
        let symbols: HashSet<GameSymbol> = self.players.iter().map(|p| p.symbol()).collect();
        if symbols.len() != PLAYER_COUNT {
            return Err(GameError::InvalidPlayers {
                expected: PLAYER_COUNT,
            });
        }

        let seed = self.seed.unwrap_or_else(rand::random);
        let rng = ChaCha20Rng::seed_from_u64(seed);
        Ok(Game::new(Board::new(size), self.players, rng))
    }
}
