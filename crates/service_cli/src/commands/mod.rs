//! Subcommand implementations, one module per command.

pub mod check;
pub mod confirm;
pub mod generate;
