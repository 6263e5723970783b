//! Seeded random bot for simulations.
//!
//! Picks uniformly among the empty cells using a ChaCha20 RNG, so large
//! bot-vs-bot runs are reproducible from a seed.

use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use gridline_engine::board::{Board, BoardCell};
use gridline_engine::errors::GameError;
use gridline_engine::player::MoveStrategy;
use gridline_engine::symbol::GameSymbol;

/// Uniform-random strategy over the empty cells of the board.
///
/// # Example
///
/// ```rust
/// use gridline_ai::random::RandomBot;
/// use gridline_engine::board::Board;
/// use gridline_engine::player::MoveStrategy;
/// use gridline_engine::symbol::GameSymbol;
///
/// let mut bot = RandomBot::new(Some(42));
/// let board = Board::new(3);
/// let mv = bot.choose_move(&board, GameSymbol::O).unwrap();
/// assert!(mv.row < 3 && mv.column < 3);
/// ```
#[derive(Debug, Clone)]
pub struct RandomBot {
    rng: ChaCha20Rng,
}

impl RandomBot {
    /// Create a random bot; without a seed the RNG is seeded from the
    /// thread RNG.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl MoveStrategy for RandomBot {
    fn choose_move(&mut self, board: &Board, symbol: GameSymbol) -> Result<BoardCell, GameError> {
        let empty: Vec<(usize, usize)> = board
            .rows()
            .enumerate()
            .flat_map(|(row_idx, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, cell)| cell.is_empty())
                    .map(move |(col_idx, _)| (row_idx, col_idx))
            })
            .collect();
        let (row, column) = *empty.choose(&mut self.rng).ok_or(GameError::NoMoveAvailable)?;
        Ok(BoardCell {
            row,
            column,
            symbol,
        })
    }

    fn name(&self) -> &str {
        "random"
    }
}
