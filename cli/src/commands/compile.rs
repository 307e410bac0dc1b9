//! The `compile` command - lower a program and print its instructions.

use quack::{CompileOptions, Compiler, Error};

use crate::cli::CompileArgs;
use crate::common::input::read_program;
use crate::common::{CliError, CliResult};

/// Run the compile command.
pub fn run(args: CompileArgs) -> CliResult<()> {
    let (program, display_name) = read_program(&args.file)?;

    let options = if args.lenient {
        CompileOptions::lenient()
    } else {
        CompileOptions::default()
    };

    let listing = Compiler::new(options)
        .compile(&program)
        .map_err(|e| CliError::in_file(e, &display_name))?;
    tracing::debug!(
        file = %display_name,
        units = listing.units.len(),
        instructions = listing.instruction_count(),
        "Compiled program"
    );

    match &args.unit {
        Some(name) => match listing.unit(name) {
            Some(unit) => println!("{unit}"),
            None => {
                let available: Vec<&str> =
                    listing.units.iter().map(|u| u.name.as_str()).collect();
                return Err(CliError::in_file(
                    Error::Input(format!(
                        "no unit named `{name}` (available: {})",
                        available.join(", ")
                    )),
                    &display_name,
                ));
            }
        },
        None => println!("{listing}"),
    }

    Ok(())
}
