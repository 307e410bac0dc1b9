//! Terminal rendering of compile errors
//!
//! The syntax tree carries no source positions, so a rendered diagnostic
//! points at the unit being lowered rather than at a source snippet.

use crate::{Diagnostic, Error, Severity};
use nu_ansi_term::{Color, Style};
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

impl CharSet {
    fn arrow(self) -> &'static str {
        match self {
            CharSet::Unicode => "╭─▶",
            CharSet::Ascii => "-->",
        }
    }

    fn note(self) -> &'static str {
        match self {
            CharSet::Unicode => "╰─",
            CharSet::Ascii => "=",
        }
    }
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The input file name to display in error messages.
    /// Defaults to "<unknown>" if not provided.
    pub filename: Option<&'a str>,
    /// The character set to use for rendering.
    /// Defaults to Unicode for rich visual output.
    pub charset: CharSet,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig<'_> {
    const fn default() -> Self {
        Self {
            color: true,
            filename: None,
            charset: CharSet::Unicode,
        }
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.color {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Render an error to stderr using default config.
pub fn render_error(error: &Error) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use quack::{CompileOptions, Compiler, RenderConfig, render_error_to};
/// use quack::ast::{BinaryOp, Block, Expr};
///
/// let block = Block::new([Expr::binop(BinaryOp::Minus, Expr::int(5), Expr::int(2))]);
/// let err = Compiler::new(CompileOptions::default())
///     .compile_block(&block)
///     .unwrap_err();
///
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&err, &mut buf, &config).unwrap();
/// let output = String::from_utf8_lossy(&buf);
/// assert!(output.starts_with("error[E0001]: no method `MINUS`"));
/// ```
pub fn render_error_to(
    error: &Error,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    match error {
        Error::Codegen { diagnostic, .. } => render_diagnostic(diagnostic, writer, config),
        Error::Input(msg) => {
            let label = config.paint(severity_style(Severity::Error), "error");
            let message = config.paint(Style::new().bold(), &format!("invalid input: {msg}"));
            writeln!(writer, "{label}: {message}")?;
            if let Some(filename) = config.filename {
                let arrow = config.paint(Color::Blue.bold(), config.charset.arrow());
                writeln!(writer, "  {arrow} {filename}")?;
            }
            Ok(())
        }
    }
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Error => Color::Red.bold(),
        Severity::Warning => Color::Yellow.bold(),
        Severity::Info => Color::Blue.bold(),
    }
}

fn render_diagnostic(
    diag: &Diagnostic,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let header = match &diag.code {
        Some(code) => format!("{}[{}]", diag.severity, code),
        None => diag.severity.to_string(),
    };
    writeln!(
        writer,
        "{}: {}",
        config.paint(severity_style(diag.severity), &header),
        config.paint(Style::new().bold(), &diag.message)
    )?;

    let filename = config.filename.unwrap_or("<unknown>");
    let arrow = config.paint(Color::Blue.bold(), config.charset.arrow());
    match &diag.unit {
        Some(unit) => writeln!(writer, "  {arrow} {filename}: in unit `{unit}`")?,
        None => writeln!(writer, "  {arrow} {filename}")?,
    }

    for help_msg in &diag.help {
        let note = config.paint(Color::Cyan.bold(), config.charset.note());
        writeln!(writer, "  {note} help: {help_msg}")?;
    }

    Ok(())
}
