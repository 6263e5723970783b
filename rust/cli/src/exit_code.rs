//! Process exit codes used by the CLI.

/// Command completed successfully.
pub const SUCCESS: i32 = 0;

/// Command failed (bad arguments, engine error, I/O failure).
pub const ERROR: i32 = 2;
