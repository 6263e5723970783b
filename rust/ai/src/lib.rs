//! # gridline-ai: Bot Strategies for Gridline
//!
//! Provides automated move strategies for gridline gameplay. Every bot
//! implements the engine's [`MoveStrategy`] seam, so bots and human-input
//! strategies are interchangeable inside a [`gridline_engine::game::Game`].
//!
//! ## Core Components
//!
//! - [`baseline`] - Deterministic rule-based bot (complete, block, first empty)
//! - [`random`] - Seeded uniform-random bot for simulations
//! - [`create_bot`] - Factory function for creating bots by name
//!
//! ## Quick Start
//!
//! ```rust
//! use gridline_ai::create_bot;
//! use gridline_engine::builder::GameBuilder;
//! use gridline_engine::player::Player;
//! use gridline_engine::symbol::GameSymbol;
//!
//! let mut game = GameBuilder::new()
//!     .with_size(3)
//!     .with_seed(42)
//!     .with_player(Player::new(GameSymbol::X, create_bot("baseline", None)))
//!     .with_player(Player::new(GameSymbol::O, create_bot("random", Some(42))))
//!     .build()
//!     .unwrap();
//!
//! game.start();
//! while !game.status().is_terminal() {
//!     game.make_move().unwrap();
//! }
//! ```
//!
//! ## Bot Kinds
//!
//! - `"baseline"` - Deterministic rule-based bot
//! - `"random"` - Uniform choice among empty cells (seeded)

use gridline_engine::player::MoveStrategy;

pub mod baseline;
pub mod random;

/// Factory function to create bots by kind string.
///
/// # Arguments
///
/// * `kind` - Bot identifier: `"baseline"` or `"random"`
/// * `seed` - RNG seed for stochastic bots; ignored by deterministic ones
///
/// # Example
///
/// ```rust
/// use gridline_ai::create_bot;
///
/// let bot = create_bot("baseline", None);
/// assert_eq!(bot.name(), "baseline");
/// ```
///
/// # Panics
///
/// Panics if an unknown bot kind is requested.
pub fn create_bot(kind: &str, seed: Option<u64>) -> Box<dyn MoveStrategy> {
    match kind {
        "baseline" => Box::new(baseline::BaselineBot::new()),
        "random" => Box::new(random::RandomBot::new(seed)),
        _ => panic!("Unknown bot kind: {}", kind),
    }
}
