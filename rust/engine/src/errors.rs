use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid players: a game needs exactly {expected} players with unique symbols")]
    InvalidPlayers { expected: usize },
    #[error("Invalid board size: {size} (minimum 1)")]
    InvalidBoardSize { size: usize },
    #[error("Cell ({row}, {column}) is already occupied")]
    InvalidMove { row: usize, column: usize },
    #[error("Cell ({row}, {column}) is outside a {size}x{size} board")]
    OutOfBounds { row: usize, column: usize, size: usize },
    #[error("Game has not been started")]
    NotStarted,
    #[error("Game is over; no further moves accepted")]
    GameOver,
    #[error("No move available from the current player")]
    NoMoveAvailable,
}
