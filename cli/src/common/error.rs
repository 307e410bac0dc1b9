//! Error handling utilities for the CLI.

use quack::{Error, RenderConfig, render_error_to};

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// A compile error together with the input it came from.
#[derive(Debug)]
pub struct CliError {
    pub error: Error,
    pub filename: Option<String>,
}

impl CliError {
    pub fn in_file(error: Error, filename: &str) -> Self {
        Self {
            error,
            filename: Some(filename.to_string()),
        }
    }
}

impl From<Error> for CliError {
    fn from(error: Error) -> Self {
        Self {
            error,
            filename: None,
        }
    }
}

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError, no_color: bool) -> ! {
    let config = RenderConfig {
        color: !no_color,
        filename: error.filename.as_deref(),
        ..Default::default()
    };
    render_error_to(&error.error, &mut std::io::stderr(), &config).ok();
    std::process::exit(1);
}
