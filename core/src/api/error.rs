//! Public error types for the Quack compile API.
//!
//! Internal errors are converted to these types at the API boundary, tagged
//! with the unit that failed.

use core::fmt;

use crate::codegen::CodegenError;
use crate::{String, Vec};

/// Public error type for all compile operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Lowering a unit failed. No listing is produced.
    Codegen {
        unit: String,
        diagnostic: Diagnostic,
    },

    /// The input could not be turned into a program (e.g., malformed JSON).
    Input(String),
}

impl Error {
    /// Wrap a generator error raised while lowering `unit`.
    pub fn codegen(unit: impl Into<String>, err: &CodegenError) -> Self {
        let unit = unit.into();
        let mut diagnostic = err.to_diagnostic();
        diagnostic.unit = Some(unit.clone());
        Error::Codegen { unit, diagnostic }
    }

    /// The diagnostic carried by this error, if any.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Error::Codegen { diagnostic, .. } => Some(diagnostic),
            Error::Input(_) => None,
        }
    }

    /// Name of the unit that failed, if any.
    pub fn unit(&self) -> Option<&str> {
        match self {
            Error::Codegen { unit, .. } => Some(unit),
            Error::Input(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Codegen { unit, diagnostic } => {
                write!(f, "Code generation failed in `{}`: {}", unit, diagnostic.message)
            }
            Error::Input(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// A diagnostic message (error, warning, or info).
///
/// The AST carries no source locations, so a diagnostic points at the unit
/// being lowered instead of a span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level (error, warning, info).
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Unit being lowered when the issue was found.
    pub unit: Option<String>,

    /// Help messages suggesting how to fix the issue.
    pub help: Vec<String>,

    /// Optional error code (e.g., "E0001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - compilation cannot succeed.
    Error,
    /// Warning - the output is produced but may not be what was meant.
    Warning,
    /// Info - informational message.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToString;
    use crate::codegen::TypeTag;

    #[test]
    fn codegen_error_records_unit() {
        let err = Error::codegen(
            "Pt_method_norm",
            &CodegenError::UnknownBuiltinMethod {
                receiver: TypeTag::String,
                method: "PLUS".to_string(),
            },
        );

        assert_eq!(err.unit(), Some("Pt_method_norm"));
        let diagnostic = err.diagnostic().unwrap();
        assert_eq!(diagnostic.unit.as_deref(), Some("Pt_method_norm"));
        assert_eq!(diagnostic.code.as_deref(), Some("E0001"));
        assert_eq!(
            err.to_string(),
            "Code generation failed in `Pt_method_norm`: no method `PLUS` on a receiver of class String"
        );
    }

    #[test]
    fn input_error_has_no_diagnostic() {
        let err = Error::Input("expected value at line 1 column 1".to_string());
        assert!(err.diagnostic().is_none());
        assert_eq!(err.to_string(), "Invalid input: expected value at line 1 column 1");
    }

    #[test]
    fn severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Info.to_string(), "info");
    }
}
