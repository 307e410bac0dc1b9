//! Compilation options.

use crate::codegen::CodegenOptions;

/// Options for a [`Compiler`](super::Compiler).
///
/// The defaults reject anything the generator cannot type exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Strictness handed to the generator for every unit.
    pub codegen: CodegenOptions,
}

impl CompileOptions {
    /// Accept unbound operands and unknown methods, typing both as `Obj`.
    pub fn lenient() -> Self {
        Self {
            codegen: CodegenOptions::lenient(),
        }
    }

    pub fn codegen(&self) -> CodegenOptions {
        self.codegen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_strict() {
        let options = CompileOptions::default().codegen();
        assert_eq!(options, CodegenOptions::default());
        assert!(options.strict_registers && options.strict_methods);
    }

    #[test]
    fn lenient_relaxes_both_checks() {
        assert_eq!(CompileOptions::lenient().codegen(), CodegenOptions::lenient());
    }

    #[test]
    fn codegen_options_pass_through_unchanged() {
        let codegen = CodegenOptions {
            strict_registers: false,
            strict_methods: true,
        };
        let options = CompileOptions { codegen };
        assert_eq!(options.codegen(), codegen);
    }
}
