use std::collections::VecDeque;
use std::fmt;

use crate::board::{Board, BoardCell};
use crate::errors::GameError;
use crate::symbol::GameSymbol;

/// Interface for producing a move given the current board state.
///
/// Concrete strategies range from scripted sequences (replay, tests) and
/// algorithmic bots to input-backed implementations that prompt a human.
/// The strategy receives the symbol it is playing as and must place that
/// symbol in the returned [`BoardCell`]; occupancy of the target cell is
/// deliberately not the strategy's concern — the game validates it.
///
/// # Example Implementation
///
/// ```
/// use gridline_engine::board::{Board, BoardCell};
/// use gridline_engine::errors::GameError;
/// use gridline_engine::player::MoveStrategy;
/// use gridline_engine::symbol::GameSymbol;
///
/// struct TopLeft;
///
/// impl MoveStrategy for TopLeft {
///     fn choose_move(
///         &mut self,
///         _board: &Board,
///         symbol: GameSymbol,
///     ) -> Result<BoardCell, GameError> {
///         Ok(BoardCell { row: 0, column: 0, symbol })
///     }
///
///     fn name(&self) -> &str {
///         "TopLeft"
///     }
/// }
/// ```
pub trait MoveStrategy {
    /// Produce the next move for `symbol` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoMoveAvailable`] when the strategy cannot
    /// produce a move at all (exhausted script, closed input stream). The
    /// driver decides whether that ends the session.
    fn choose_move(&mut self, board: &Board, symbol: GameSymbol) -> Result<BoardCell, GameError>;

    /// Human-readable identifier of this strategy.
    fn name(&self) -> &str;
}

/// A game participant: a symbol bound to a move-producing strategy.
///
/// Players are constructed externally, handed to the builder, and stay
/// immutable for the game's duration apart from the interior state of their
/// strategy (an input cursor, an RNG). The symbol contract of
/// [`MoveStrategy`] is enforced by construction: [`Player::make_move`]
/// always passes the player's own symbol down to the strategy.
pub struct Player {
    symbol: GameSymbol,
    strategy: Box<dyn MoveStrategy>,
}

impl Player {
    pub fn new(symbol: GameSymbol, strategy: Box<dyn MoveStrategy>) -> Self {
        Self { symbol, strategy }
    }

    /// The player's symbol, stable for the player's lifetime.
    pub fn symbol(&self) -> GameSymbol {
        self.symbol
    }

    /// Name of the underlying strategy.
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Ask the strategy for this player's next move.
    ///
    /// # Errors
    ///
    /// Propagates [`GameError::NoMoveAvailable`] from the strategy.
    pub fn make_move(&mut self, board: &Board) -> Result<BoardCell, GameError> {
        self.strategy.choose_move(board, self.symbol)
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("symbol", &self.symbol)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

/// Strategy that replays a fixed sequence of (row, column) targets.
///
/// Used to drive games from recorded histories and in tests. Once the
/// script runs out, [`MoveStrategy::choose_move`] fails with
/// [`GameError::NoMoveAvailable`].
///
/// # Examples
///
/// ```
/// use gridline_engine::board::Board;
/// use gridline_engine::player::{MoveStrategy, ScriptedMoves};
/// use gridline_engine::symbol::GameSymbol;
///
/// let mut script = ScriptedMoves::new(vec![(0, 0), (1, 1)]);
/// let board = Board::new(3);
/// let mv = script.choose_move(&board, GameSymbol::X).unwrap();
/// assert_eq!((mv.row, mv.column), (0, 0));
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedMoves {
    moves: VecDeque<(usize, usize)>,
}

impl ScriptedMoves {
    pub fn new(moves: Vec<(usize, usize)>) -> Self {
        Self {
            moves: moves.into(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveStrategy for ScriptedMoves {
    fn choose_move(&mut self, _board: &Board, symbol: GameSymbol) -> Result<BoardCell, GameError> {
        let (row, column) = self.moves.pop_front().ok_or(GameError::NoMoveAvailable)?;
        Ok(BoardCell {
            row,
            column,
            symbol,
        })
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
