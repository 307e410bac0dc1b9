//! File input utilities.

use std::io::Read;

use quack::Error;
use quack::ast::Program;

use super::{CliError, CliResult};

/// Read input from a file path or stdin if path is "-".
///
/// Returns the content and a display name for error messages.
pub fn read_input(path: &str) -> Result<(String, String), String> {
    if is_stdin(path) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| format!("<stdin>: {}", e))?;
        Ok((content, "<stdin>".to_string()))
    } else {
        let content = std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
        Ok((content, path.to_string()))
    }
}

/// Read and decode a JSON syntax tree.
pub fn read_program(path: &str) -> CliResult<(Program, String)> {
    let (content, display_name) = read_input(path).map_err(Error::Input)?;
    let program = serde_json::from_str(&content)
        .map_err(|e| CliError::in_file(Error::Input(e.to_string()), &display_name))?;
    Ok((program, display_name))
}

/// Check if the path represents stdin.
pub fn is_stdin(path: &str) -> bool {
    path == "-"
}
