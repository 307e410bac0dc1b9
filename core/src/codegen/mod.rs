//! Tree-to-register code generation.
//!
//! Every value lives in its own register, and every register carries an
//! approximate runtime type tag. Tags select the pointer casts on call
//! operands and the method-table entry that types each call's result.

mod context;
mod dispatch;
mod error;
mod expr;
mod literal;

pub use context::{CodegenContext, Register, TypeTag};
pub use dispatch::{BuiltinClass, DispatchTable};
pub use error::{CodegenError, CodegenResult, Position};
pub use expr::{CodegenOptions, Generator};
pub use literal::c_string_literal;
