//! CLI subcommand implementations.

pub mod boards;
pub mod generate;
pub mod resolve;
