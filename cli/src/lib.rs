//! Quack compiler CLI library.
//!
//! This crate provides the `quackc` command-line interface.
//! The public modules are primarily exposed for testing purposes.

pub mod cli;
pub mod commands;
pub mod common;
