//! Baseline bot for gridline gameplay.
//!
//! Provides a simple deterministic opponent used for testing, benchmarking,
//! and as a reference point when comparing strategies.

use gridline_engine::board::{Board, BoardCell, Cell};
use gridline_engine::errors::GameError;
use gridline_engine::player::MoveStrategy;
use gridline_engine::symbol::GameSymbol;

/// Deterministic rule-based bot playing the row-line rule.
///
/// # Strategy
///
/// In priority order:
/// 1. Complete an own row that needs exactly one more cell (winning move)
/// 2. Fill the last empty cell of a row the opponent otherwise completes
/// 3. Take the first empty cell in row-major order
///
/// Since only rows win, blocking means denying the opponent a monochromatic
/// row; the bot never reasons about columns or diagonals.
///
/// # Example
///
/// ```rust
/// use gridline_ai::baseline::BaselineBot;
/// use gridline_engine::board::Board;
/// use gridline_engine::player::MoveStrategy;
/// use gridline_engine::symbol::GameSymbol;
///
/// let mut bot = BaselineBot::new();
/// let board = Board::new(3);
/// let mv = bot.choose_move(&board, GameSymbol::X).unwrap();
/// assert_eq!((mv.row, mv.column), (0, 0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineBot;

impl BaselineBot {
    pub fn new() -> Self {
        Self
    }

    /// Find a row where every cell except one empty slot belongs to
    /// `symbol`, returning that slot.
    fn completing_cell(board: &Board, symbol: GameSymbol) -> Option<(usize, usize)> {
        for (row_idx, row) in board.rows().enumerate() {
            let mut empty_column = None;
            let mut own = 0usize;
            for (col_idx, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Empty => {
                        if empty_column.is_some() {
                            empty_column = None;
                            break;
                        }
                        empty_column = Some(col_idx);
                    }
                    Cell::Occupied(s) if *s == symbol => own += 1,
                    Cell::Occupied(_) => {
                        empty_column = None;
                        break;
                    }
                }
            }
            if let Some(column) = empty_column {
                if own + 1 == board.size() {
                    return Some((row_idx, column));
                }
            }
        }
        None
    }

    /// A row the opponent is one move away from completing.
    fn blocking_cell(board: &Board, own: GameSymbol) -> Option<(usize, usize)> {
        for (row_idx, row) in board.rows().enumerate() {
            let mut empty_column = None;
            let mut opponent = None;
            let mut valid = true;
            for (col_idx, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Empty => {
                        if empty_column.is_some() {
                            valid = false;
                            break;
                        }
                        empty_column = Some(col_idx);
                    }
                    Cell::Occupied(s) if *s == own => {
                        valid = false;
                        break;
                    }
                    Cell::Occupied(s) => match opponent {
                        None => opponent = Some(*s),
                        Some(o) if o == *s => {}
                        Some(_) => {
                            valid = false;
                            break;
                        }
                    },
                }
            }
            if valid {
                if let (Some(column), Some(_)) = (empty_column, opponent) {
                    return Some((row_idx, column));
                }
            }
        }
        None
    }

    fn first_empty(board: &Board) -> Option<(usize, usize)> {
        for (row_idx, row) in board.rows().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                if cell.is_empty() {
                    return Some((row_idx, col_idx));
                }
            }
        }
        None
    }
}

impl MoveStrategy for BaselineBot {
    fn choose_move(&mut self, board: &Board, symbol: GameSymbol) -> Result<BoardCell, GameError> {
        let (row, column) = Self::completing_cell(board, symbol)
            .or_else(|| Self::blocking_cell(board, symbol))
            .or_else(|| Self::first_empty(board))
            .ok_or(GameError::NoMoveAvailable)?;
        Ok(BoardCell {
            row,
            column,
            symbol,
        })
    }

    fn name(&self) -> &str {
        "baseline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, row: usize, column: usize, symbol: GameSymbol) {
        board
            .update(&BoardCell {
                row,
                column,
                symbol,
            })
            .unwrap();
    }

    #[test]
    fn test_takes_first_empty_on_open_board() {
        let mut bot = BaselineBot::new();
        let board = Board::new(3);
        let mv = bot.choose_move(&board, GameSymbol::X).unwrap();
        assert_eq!((mv.row, mv.column), (0, 0));
    }

    #[test]
    fn test_completes_own_almost_full_row() {
        let mut bot = BaselineBot::new();
        let mut board = Board::new(3);
        place(&mut board, 2, 0, GameSymbol::X);
        place(&mut board, 2, 2, GameSymbol::X);
        let mv = bot.choose_move(&board, GameSymbol::X).unwrap();
        assert_eq!((mv.row, mv.column), (2, 1));
    }

    #[test]
    fn test_blocks_opponent_row_when_no_win_available() {
        let mut bot = BaselineBot::new();
        let mut board = Board::new(3);
        place(&mut board, 1, 0, GameSymbol::O);
        place(&mut board, 1, 1, GameSymbol::O);
        let mv = bot.choose_move(&board, GameSymbol::X).unwrap();
        assert_eq!((mv.row, mv.column), (1, 2));
    }

    #[test]
    fn test_prefers_winning_over_blocking() {
        let mut bot = BaselineBot::new();
        let mut board = Board::new(3);
        // opponent threatens row 0, but row 2 is our win
        place(&mut board, 0, 0, GameSymbol::O);
        place(&mut board, 0, 1, GameSymbol::O);
        place(&mut board, 2, 0, GameSymbol::X);
        place(&mut board, 2, 1, GameSymbol::X);
        let mv = bot.choose_move(&board, GameSymbol::X).unwrap();
        assert_eq!((mv.row, mv.column), (2, 2));
    }

    #[test]
    fn test_full_board_yields_no_move() {
        let mut bot = BaselineBot::new();
        let mut board = Board::new(1);
        place(&mut board, 0, 0, GameSymbol::O);
        assert_eq!(
            bot.choose_move(&board, GameSymbol::X),
            Err(GameError::NoMoveAvailable)
        );
    }
}
