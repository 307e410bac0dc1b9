//! Command implementations.
//!
//! Each subcommand has its own module with a `run` function.

pub mod compile;
pub mod completions;
pub mod dump;
