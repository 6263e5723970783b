use gridline_engine::board::{Board, BoardCell};
use gridline_engine::rules::winning_row;
use gridline_engine::symbol::GameSymbol;

fn place(board: &mut Board, row: usize, column: usize, symbol: GameSymbol) {
    board
        .update(&BoardCell {
            row,
            column,
            symbol,
        })
        .expect("in range");
}

#[test]
fn full_row_of_one_symbol_wins() {
    let mut board = Board::new(3);
    for column in 0..3 {
        place(&mut board, 0, column, GameSymbol::O);
    }
    assert_eq!(winning_row(&board, GameSymbol::O), Some(0));
    assert_eq!(winning_row(&board, GameSymbol::X), None);
}

#[test]
fn full_column_does_not_win() {
    let mut board = Board::new(3);
    for row in 0..3 {
        place(&mut board, row, 0, GameSymbol::X);
    }
    assert_eq!(winning_row(&board, GameSymbol::X), None);
}

#[test]
fn diagonal_does_not_win() {
    let mut board = Board::new(3);
    for i in 0..3 {
        place(&mut board, i, i, GameSymbol::X);
    }
    assert_eq!(winning_row(&board, GameSymbol::X), None);
}

#[test]
fn mixed_row_does_not_win() {
    let mut board = Board::new(2);
    place(&mut board, 0, 0, GameSymbol::X);
    place(&mut board, 0, 1, GameSymbol::O);
    assert_eq!(winning_row(&board, GameSymbol::X), None);
    assert_eq!(winning_row(&board, GameSymbol::O), None);
}

#[test]
fn size_one_board_wins_on_its_single_cell() {
    let mut board = Board::new(1);
    assert_eq!(winning_row(&board, GameSymbol::X), None);
    place(&mut board, 0, 0, GameSymbol::X);
    assert_eq!(winning_row(&board, GameSymbol::X), Some(0));
}

#[test]
fn reports_first_winning_row() {
    let mut board = Board::new(2);
    for row in 0..2 {
        for column in 0..2 {
            place(&mut board, row, column, GameSymbol::O);
        }
    }
    assert_eq!(winning_row(&board, GameSymbol::O), Some(0));
}
