use crate::board::{Board, Cell};
use crate::symbol::GameSymbol;

/// Row-line win rule: a player wins if and only if some row of the board is
/// entirely their symbol. Columns and diagonals never win — that is the
/// rule this engine plays, not an omission. See DESIGN.md for the rationale.
///
/// Returns the index of the first winning row, or `None`.
///
/// # Examples
///
/// ```
/// use gridline_engine::board::{Board, BoardCell};
/// use gridline_engine::rules::winning_row;
/// use gridline_engine::symbol::GameSymbol;
///
/// let mut board = Board::new(3);
/// for column in 0..3 {
///     board
///         .update(&BoardCell { row: 1, column, symbol: GameSymbol::X })
///         .unwrap();
/// }
/// assert_eq!(winning_row(&board, GameSymbol::X), Some(1));
/// assert_eq!(winning_row(&board, GameSymbol::O), None);
/// ```
pub fn winning_row(board: &Board, symbol: GameSymbol) -> Option<usize> {
    board
        .rows()
        .position(|row| row.iter().all(|c| *c == Cell::Occupied(symbol)))
}

/// Draw predicate: the board is full and nobody holds a winning row.
/// The winner scan runs per-symbol at move time, so by the time this is
/// asked the only open question is whether any cell remains.
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}
