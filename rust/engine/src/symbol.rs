use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque per-player marker used to claim cells and to test for a winning row.
/// Two players in the same game must never share a symbol; the builder
/// enforces this at construction time.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct GameSymbol(char);

impl GameSymbol {
    /// Conventional first-player symbol.
    pub const X: GameSymbol = GameSymbol('X');
    /// Conventional second-player symbol.
    pub const O: GameSymbol = GameSymbol('O');

    /// Create a symbol from an arbitrary character token.
    pub fn new(token: char) -> GameSymbol {
        GameSymbol(token)
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl fmt::Display for GameSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
