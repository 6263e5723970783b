//! Command handler modules for the gridline CLI.
//!
//! Each subcommand lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) passed as parameters for testability
//! - Errors propagated via the `CliError` enum

mod play;
mod rng;
mod sim;

pub use play::handle_play_command;
pub use rng::handle_rng_command;
pub use sim::handle_sim_command;
