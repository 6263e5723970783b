use gridline_engine::board::{Board, BoardCell, Cell};
use gridline_engine::errors::GameError;
use gridline_engine::symbol::GameSymbol;

#[test]
fn new_board_has_every_cell_empty() {
    let board = Board::new(4);
    for row in 0..4 {
        for column in 0..4 {
            assert!(board.is_empty(row, column).expect("in range"));
        }
    }
    assert!(!board.is_full());
}

#[test]
fn update_claims_cell_and_leaves_neighbors_alone() {
    let mut board = Board::new(3);
    board
        .update(&BoardCell {
            row: 1,
            column: 2,
            symbol: GameSymbol::X,
        })
        .expect("in range");
    assert!(!board.is_empty(1, 2).unwrap());
    assert_eq!(board.cell(1, 2).unwrap(), Cell::Occupied(GameSymbol::X));
    assert!(board.is_empty(1, 1).unwrap());
    assert!(board.is_empty(2, 2).unwrap());
}

#[test]
fn out_of_bounds_reads_and_writes_fail() {
    let mut board = Board::new(2);
    assert_eq!(
        board.is_empty(2, 0),
        Err(GameError::OutOfBounds {
            row: 2,
            column: 0,
            size: 2
        })
    );
    let result = board.update(&BoardCell {
        row: 0,
        column: 5,
        symbol: GameSymbol::O,
    });
    assert_eq!(
        result,
        Err(GameError::OutOfBounds {
            row: 0,
            column: 5,
            size: 2
        })
    );
}

#[test]
fn rows_view_is_row_major() {
    let mut board = Board::new(2);
    board
        .update(&BoardCell {
            row: 0,
            column: 1,
            symbol: GameSymbol::O,
        })
        .unwrap();
    let rows: Vec<&[Cell]> = board.rows().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][1], Cell::Occupied(GameSymbol::O));
    assert_eq!(rows[1][0], Cell::Empty);
}

#[test]
fn board_fills_up() {
    let mut board = Board::new(2);
    for row in 0..2 {
        for column in 0..2 {
            board
                .update(&BoardCell {
                    row,
                    column,
                    symbol: GameSymbol::X,
                })
                .unwrap();
        }
    }
    assert!(board.is_full());
}
