//! Input parsing for interactive commands.
//!
//! Turns raw lines typed by a human into either a move target, a quit
//! request, or a structured complaint. Parsed coordinates are 0-based and
//! are only range-checked against the board by the engine itself.

/// Result of parsing one line of human move input.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// A (row, column) target, 0-based
    Move(usize, usize),
    /// User entered a quit command (q or quit)
    Quit,
    /// Unusable input with an error message
    Invalid(String),
}

/// Parse a line of move input.
///
/// Accepted forms (case-insensitive):
/// - `"ROW COL"` or `"ROW,COL"` — a 0-based move target
/// - `"q"` or `"quit"` — leave the session
///
/// # Example
///
/// ```rust
/// # use gridline_cli::validation::{parse_move_input, ParseResult};
/// assert_eq!(parse_move_input("1 2"), ParseResult::Move(1, 2));
/// assert_eq!(parse_move_input("0,0"), ParseResult::Move(0, 0));
/// assert_eq!(parse_move_input("q"), ParseResult::Quit);
///
/// match parse_move_input("up and left a bit") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("ROW COL")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_move_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();

    match parts.as_slice() {
        [] => ParseResult::Invalid("Empty input".to_string()),
        ["q"] | ["quit"] => ParseResult::Quit,
        [row, column] => match (row.parse::<usize>(), column.parse::<usize>()) {
            (Ok(row), Ok(column)) => ParseResult::Move(row, column),
            _ => ParseResult::Invalid(
                "Coordinates must be non-negative integers (e.g., '0 2')".to_string(),
            ),
        },
        _ => ParseResult::Invalid("Enter a move as 'ROW COL', or 'q' to quit".to_string()),
    }
}
