//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// quackc - lower Quack syntax trees into register-machine instructions
#[derive(Parser, Debug)]
#[command(name = "quackc", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile a program and print its instructions
    Compile(CompileArgs),

    /// Print the tree-dump of a program
    Dump(DumpArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `compile` command.
#[derive(Args, Debug)]
pub struct CompileArgs {
    /// JSON syntax tree to compile (use - for stdin)
    pub file: String,

    /// Type unbound operands and unknown methods as Obj instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Print only the named unit (e.g. main, Pt_constructor, Pt_method_show)
    #[arg(long, value_name = "NAME")]
    pub unit: Option<String>,
}

/// Arguments for the `dump` command.
#[derive(Args, Debug)]
pub struct DumpArgs {
    /// JSON syntax tree to dump (use - for stdin)
    pub file: String,
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
