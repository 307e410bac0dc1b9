//! Code generation errors.

use core::fmt;

use thiserror::Error;

use super::context::{Register, TypeTag};
use crate::api::{Diagnostic, Severity};
use crate::{String, ToString, Vec, format};

pub type CodegenResult<T> = Result<T, CodegenError>;

/// Where a value is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Receiver,
    /// Zero-based argument index.
    Argument(usize),
    /// The single operand of a statement such as `return`.
    Operand,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Receiver => f.write_str("receiver"),
            Position::Argument(index) => write!(f, "argument {}", index + 1),
            Position::Operand => f.write_str("operand"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    #[error("no method `{method}` on a receiver of class {receiver}")]
    UnknownBuiltinMethod { receiver: TypeTag, method: String },

    #[error("{position} of `{method}` is held in {register}, which no instruction has written")]
    UnboundRegisterType {
        method: String,
        position: Position,
        register: Register,
    },

    #[error("code generation for `{kind}` nodes is not implemented")]
    UnsupportedNode { kind: &'static str },
}

impl CodegenError {
    /// Stable code for documentation lookup.
    pub fn code(&self) -> &'static str {
        match self {
            CodegenError::UnknownBuiltinMethod { .. } => "E0001",
            CodegenError::UnboundRegisterType { .. } => "E0002",
            CodegenError::UnsupportedNode { .. } => "E0003",
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let help: Vec<String> = match self {
            CodegenError::UnknownBuiltinMethod { receiver, .. } => Vec::from([format!(
                "the runtime method table for {receiver} has no such slot"
            )]),
            CodegenError::UnboundRegisterType { .. } => Vec::from([
                "local variable loads are resolved by the backend and produce no value here"
                    .to_string(),
                "compile with relaxed register checking to cast it as `obj_Obj`".to_string(),
            ]),
            CodegenError::UnsupportedNode { .. } => Vec::new(),
        };

        Diagnostic {
            severity: Severity::Error,
            message: self.to_string(),
            unit: None,
            help,
            code: Some(self.code().to_string()),
        }
    }
}
