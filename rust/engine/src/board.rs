use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::symbol::GameSymbol;

/// State of a single grid position: either unclaimed or claimed by a symbol.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// No symbol has been placed here yet
    Empty,
    /// Claimed by the given symbol; never changes again
    Occupied(GameSymbol),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Move descriptor: a target position together with the symbol being placed.
/// Produced by a player's move strategy and consumed by the game, which
/// validates occupancy before applying it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BoardCell {
    pub row: usize,
    pub column: usize,
    pub symbol: GameSymbol,
}

/// Square grid holding per-cell occupancy state.
///
/// The board is created with a fixed size at game-build time and never
/// resized. It is exclusively owned and mutated by the [`crate::game::Game`]
/// that holds it; [`Board::update`] is a raw write and does not re-validate
/// occupancy (that is the game's job).
///
/// # Examples
///
/// ```
/// use gridline_engine::board::Board;
///
/// let board = Board::new(3);
/// assert_eq!(board.size(), 3);
/// assert!(board.is_empty(0, 0).unwrap());
/// assert!(board.is_empty(3, 0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    /// Row-major cell storage, length size * size
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size` x `size` board. The builder rejects size 0
    /// before this is ever reached.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true iff the cell at (row, column) holds no symbol.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] when the coordinates fall outside
    /// the grid.
    pub fn is_empty(&self, row: usize, column: usize) -> Result<bool, GameError> {
        Ok(self.cells[self.index(row, column)?].is_empty())
    }

    /// Read a single cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] when the coordinates fall outside
    /// the grid.
    pub fn cell(&self, row: usize, column: usize) -> Result<Cell, GameError> {
        Ok(self.cells[self.index(row, column)?])
    }

    /// Write the move's symbol into the grid. This is a raw write: the
    /// target cell is not checked for occupancy here, only for bounds.
    /// Callers must have validated emptiness beforehand.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] when the move targets a cell
    /// outside the grid; the board is left unchanged.
    pub fn update(&mut self, cell: &BoardCell) -> Result<(), GameError> {
        let idx = self.index(cell.row, cell.column)?;
        self.cells[idx] = Cell::Occupied(cell.symbol);
        Ok(())
    }

    /// Read view over the rows of the board, in row order. Used by the win
    /// and draw scans.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    fn index(&self, row: usize, column: usize) -> Result<usize, GameError> {
        if row >= self.size || column >= self.size {
            return Err(GameError::OutOfBounds {
                row,
                column,
                size: self.size,
            });
        }
        Ok(row * self.size + column)
    }
}
