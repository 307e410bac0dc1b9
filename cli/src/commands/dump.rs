//! The `dump` command - print the tree-dump of a program.

use quack::ast;

use crate::cli::DumpArgs;
use crate::common::CliResult;
use crate::common::input::read_program;

/// Run the dump command.
pub fn run(args: DumpArgs) -> CliResult<()> {
    let (program, _display_name) = read_program(&args.file)?;
    println!("{}", ast::dump::to_string(&program));
    Ok(())
}
