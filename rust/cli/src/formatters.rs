//! Display formatting for boards and game outcomes.
//!
//! Pure string builders so command handlers can write to any `Write`
//! implementation and tests can assert on exact output.

use gridline_engine::board::{Board, Cell};
use gridline_engine::game::GameStatus;
use gridline_engine::symbol::GameSymbol;

/// Render the board as a grid with column and row indices, using `.` for
/// empty cells.
///
/// ```text
///   0 1 2
/// 0 X . O
/// 1 . X .
/// 2 . . O
/// ```
pub fn format_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("  ");
    for column in 0..board.size() {
        out.push_str(&format!("{} ", column));
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
    for (row_idx, row) in board.rows().enumerate() {
        out.push_str(&format!("{} ", row_idx));
        for cell in row {
            match cell {
                Cell::Empty => out.push('.'),
                Cell::Occupied(symbol) => out.push(symbol.as_char()),
            }
            out.push(' ');
        }
        // trim the trailing space on each row
        while out.ends_with(' ') {
            out.pop();
        }
        out.push('\n');
    }
    out
}

/// One-line summary of a game's outcome.
pub fn format_outcome(status: GameStatus, winner: Option<GameSymbol>) -> String {
    match (status, winner) {
        (GameStatus::Finished, Some(symbol)) => format!("Winner: {}", symbol),
        (GameStatus::Drawn, _) => "Draw".to_string(),
        _ => "In progress".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridline_engine::board::BoardCell;

    #[test]
    fn test_format_empty_board() {
        let board = Board::new(2);
        assert_eq!(format_board(&board), "  0 1\n0 . .\n1 . .\n");
    }

    #[test]
    fn test_format_board_shows_symbols() {
        let mut board = Board::new(2);
        board
            .update(&BoardCell {
                row: 0,
                column: 1,
                symbol: GameSymbol::X,
            })
            .unwrap();
        board
            .update(&BoardCell {
                row: 1,
                column: 0,
                symbol: GameSymbol::O,
            })
            .unwrap();
        assert_eq!(format_board(&board), "  0 1\n0 . X\n1 O .\n");
    }

    #[test]
    fn test_format_outcome_variants() {
        assert_eq!(
            format_outcome(GameStatus::Finished, Some(GameSymbol::X)),
            "Winner: X"
        );
        assert_eq!(format_outcome(GameStatus::Drawn, None), "Draw");
        assert_eq!(format_outcome(GameStatus::InProgress, None), "In progress");
    }
}
