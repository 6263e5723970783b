//! Random number generator inspection command.
//!
//! The `rng` command samples the ChaCha20 generator the engine uses for
//! first-mover selection and seeded bots. Running it twice with the same
//! seed must print the same values; that is the property it exists to show.

use crate::error::CliError;
use rand::{RngCore, SeedableRng};
use std::io::Write;

/// Handle the rng command: print a short sample from a seeded ChaCha20 RNG.
///
/// # Arguments
///
/// * `seed` - Seed value for the RNG (random if `None`)
/// * `out` - Output stream for the sample values
///
/// # Errors
///
/// Returns `CliError::Io` on write failure.
pub fn handle_rng_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let s = seed.unwrap_or_else(rand::random);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(s);
    let vals: Vec<u64> = (0..5).map(|_| rng.next_u64()).collect();
    writeln!(out, "RNG sample (seed={}): {:?}", s, vals)?;
    Ok(())
}
