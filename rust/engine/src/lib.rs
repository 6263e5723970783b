//! # gridline-engine: Turn-Based Grid Game Core
//!
//! A single-threaded, turn-sequential engine for a generalized tic-tac-toe
//! played on an N x N grid. Provides board state, pluggable per-player move
//! strategies, a validating game builder, and reproducible first-mover
//! selection via seeded RNG.
//!
//! ## Core Modules
//!
//! - [`symbol`] - Opaque per-player markers ([`symbol::GameSymbol`])
//! - [`board`] - Grid state, cells, and move descriptors
//! - [`player`] - Players and the [`player::MoveStrategy`] seam
//! - [`rules`] - The row-line win rule and draw detection
//! - [`game`] - Turn orchestration and the game state machine
//! - [`builder`] - Validating factory for game construction
//! - [`logger`] - Match history records and JSONL serialization
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use gridline_engine::builder::GameBuilder;
//! use gridline_engine::player::{Player, ScriptedMoves};
//! use gridline_engine::symbol::GameSymbol;
//!
//! let mut game = GameBuilder::new()
//!     .with_size(3)
//!     .with_seed(42)
//!     .with_player(Player::new(
//!         GameSymbol::X,
//!         Box::new(ScriptedMoves::new(vec![(0, 0), (0, 1), (0, 2)])),
//!     ))
//!     .with_player(Player::new(
//!         GameSymbol::O,
//!         Box::new(ScriptedMoves::new(vec![(1, 0), (1, 1)])),
//!     ))
//!     .build()
//!     .unwrap();
//!
//! // start() picks the first mover at random (seeded); start_from() is the
//! // deterministic variant.
//! game.start_from(0);
//! while !game.status().is_terminal() {
//!     game.make_move().unwrap();
//! }
//! assert_eq!(game.winner(), Some(GameSymbol::X));
//! ```
//!
//! ## The Row-Line Rule
//!
//! A move wins if and only if it completes a row made entirely of the
//! moving player's symbol. Columns and diagonals do not win. See
//! [`rules::winning_row`].
//!
//! ## Error Handling
//!
//! Operations return [`errors::GameError`]. A rejected move (occupied cell,
//! out-of-range target) leaves the board and turn index untouched, so a
//! driver may re-prompt the same player and call
//! [`game::Game::make_move`] again.

pub mod board;
pub mod builder;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod rules;
pub mod symbol;
