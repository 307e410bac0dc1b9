//! Quack - the middle end of a compiler for the Quack object language
//!
//! # Overview
//!
//! Quack programs arrive here as a fully parsed syntax tree. This crate
//! lowers the tree into straight-line, register-based instructions for a
//! C-like backend, where every method call is an indirect call through the
//! receiver's class method table.
//!
//! Operators are sugar for method calls, so `3 + 4` is dispatched exactly
//! like `3.PLUS(4)`. The generator tracks an approximate runtime class for
//! every register and uses it to pick the pointer casts on call operands and
//! to type each call's result from the runtime's method table.
//!
//! # Quick Start
//!
//! ```
//! use quack::{CompileOptions, Compiler};
//! use quack::ast::{BinaryOp, Block, Expr, Program};
//!
//! let program = Program {
//!     classes: Vec::new(),
//!     statements: Block::new([Expr::binop(BinaryOp::Plus, Expr::int(3), Expr::int(4))]),
//! };
//!
//! let listing = Compiler::new(CompileOptions::default()).compile(&program).unwrap();
//! assert_eq!(
//!     listing.to_string(),
//!     "// main\n\
//!      tmp__0 = int_literal(3);\n\
//!      tmp__1 = int_literal(4);\n\
//!      tmp__2 = (obj_Obj) ((obj_Int) tmp__0)->clazz->PLUS((obj_Int) tmp__0, (obj_Int) tmp__1);"
//! );
//! ```
//!
//! # Extending the runtime
//!
//! The built-in method table only knows the methods the runtime's built-in
//! classes define. Callers targeting a richer runtime extend it:
//!
//! ```
//! use quack::{CompileOptions, Compiler, DispatchTable, TypeTag};
//! use quack::ast::{BinaryOp, Block, Expr};
//!
//! let table = DispatchTable::builtin()
//!     .clone()
//!     .with_method(TypeTag::Int, "TIMES", TypeTag::Int);
//! let compiler = Compiler::with_table(&table, CompileOptions::default());
//!
//! let unit = compiler
//!     .compile_block(&Block::new([Expr::binop(BinaryOp::Times, Expr::int(6), Expr::int(7))]))
//!     .unwrap();
//! assert_eq!(unit.result.to_string(), "tmp__2");
//! ```

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

// Re-export public API from quack_core
pub use quack_core::api::{
    CompileOptions, Compiler, Diagnostic, Error, Listing, Severity, Unit,
};

pub use quack_core::ast::{self, PrintContext, TreeDump};
pub use quack_core::codegen::{self, CodegenOptions, DispatchTable, Register, TypeTag};
