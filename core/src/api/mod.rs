//! Public API for compiling Quack programs.
//!
//! A program compiles into a [`Listing`] of independent units: the top-level
//! statements first, then each class's constructor and methods in source
//! order. Every unit is lowered with its own register numbering.
//!
//! # Example
//!
//! ```
//! use quack_core::api::{CompileOptions, Compiler};
//! use quack_core::ast::{BinaryOp, Block, Expr, Program};
//!
//! let program = Program {
//!     classes: Vec::new(),
//!     statements: Block::new([Expr::binop(BinaryOp::Plus, Expr::int(3), Expr::int(4))]),
//! };
//!
//! let listing = Compiler::new(CompileOptions::default()).compile(&program).unwrap();
//! let main = listing.unit("main").unwrap();
//! assert_eq!(main.instructions.len(), 3);
//! assert_eq!(main.result.to_string(), "tmp__2");
//! ```

pub mod compiler;
pub mod error;
pub mod options;

pub use compiler::{Compiler, Listing, Unit};
pub use error::{Diagnostic, Error, Severity};
pub use options::CompileOptions;
