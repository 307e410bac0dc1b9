//! Panic handler for user-friendly crash reporting.

use std::panic::PanicHookInfo;

/// Install the custom panic handler.
///
/// This should be called early in main() before any other initialization.
pub fn install_handler() {
    std::panic::set_hook(Box::new(panic_hook));
}

fn panic_hook(info: &PanicHookInfo<'_>) {
    let report = CrashReport::from_hook(info);

    eprintln!("\nquackc crashed unexpectedly!\n");
    eprintln!("{}", report.summary());
    eprintln!(
        "\nquackc {} ({}/{})",
        report.version, report.os, report.arch
    );

    if let Some(command_line) = report.format_command_line() {
        eprintln!("\nTo reproduce, run:");
        eprintln!("  {command_line}");
    }
    eprintln!("\nPlease include the input file when reporting this crash.");
}

/// What a crash report needs to reproduce the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrashReport {
    pub version: String,
    pub os: String,
    pub arch: String,
    pub location: String,
    /// Command line arguments (each arg as a separate element).
    pub command_line: Vec<String>,
    pub message: String,
}

impl CrashReport {
    fn from_hook(info: &PanicHookInfo<'_>) -> Self {
        let message = info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| info.payload().downcast_ref::<String>().map(|s| s.as_str()))
            .unwrap_or("unknown");

        let location = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            location,
            // Skip program name
            command_line: std::env::args().skip(1).collect(),
            message: message.to_string(),
        }
    }

    /// Where the panic was raised and its message, laid out like the default hook.
    pub fn summary(&self) -> String {
        format!("panicked at {}:\n{}", self.location, self.message)
    }

    /// Format the command line for display, properly shell-escaped.
    pub fn format_command_line(&self) -> Option<String> {
        if self.command_line.is_empty() {
            return None;
        }
        Some(format!(
            "quackc {}",
            shlex::try_join(self.command_line.iter().map(|s| s.as_str())).ok()?
        ))
    }
}
