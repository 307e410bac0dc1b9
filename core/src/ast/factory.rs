//! Convenience constructors for synthesizing nodes.
//!
//! Operators are sugar for method calls: `a + b` is `a.PLUS(b)`, `not a` is
//! `a.NOT()`, and `a.f` is `a.f()`. The `*_call` helpers perform that
//! rewrite so the code generator only has one dispatch path.

use super::{Actuals, BinaryOp, Block, Expr, Ident, NOT_METHOD};
use crate::{Box, String, Vec};

impl Expr {
    pub fn int(value: i32) -> Self {
        Expr::IntConst { value }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::StrConst {
            value: value.into(),
        }
    }

    pub fn ident(text: impl Into<String>) -> Self {
        Expr::Ident(Ident::new(text))
    }

    /// Load of a named local.
    pub fn load(name: impl Into<String>) -> Self {
        Expr::Load {
            loc: Box::new(Expr::ident(name)),
        }
    }

    pub fn call(
        receiver: Expr,
        method: impl Into<String>,
        args: impl IntoIterator<Item = Expr>,
    ) -> Self {
        Expr::Call {
            receiver: Box::new(receiver),
            method: Ident::new(method),
            actuals: Actuals::new(args),
        }
    }

    pub fn construct(class: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Construct {
            class: Ident::new(class),
            actuals: Actuals::new(args),
        }
    }

    pub fn binop(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::BinOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn not(operand: Expr) -> Self {
        Expr::Not {
            operand: Box::new(operand),
        }
    }

    pub fn dot(left: Expr, right: impl Into<String>) -> Self {
        Expr::Dot {
            left: Box::new(left),
            right: Ident::new(right),
        }
    }

    pub fn assign(lexpr: Expr, rexpr: Expr) -> Self {
        Expr::Assign {
            lexpr: Box::new(lexpr),
            rexpr: Box::new(rexpr),
        }
    }

    /// Rewrite `left <op> right` into the call `left.<METHOD>(right)`.
    pub fn binop_call(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::call(left, op.method_name(), [right])
    }

    /// Rewrite `not operand` into `operand.NOT()`.
    pub fn not_call(operand: Expr) -> Self {
        Expr::call(operand, NOT_METHOD, [])
    }

    /// Rewrite `left.right` into `left.right()`.
    pub fn dot_call(left: Expr, right: impl Into<String>) -> Self {
        Expr::call(left, right, [])
    }
}

impl Actuals {
    pub fn new(args: impl IntoIterator<Item = Expr>) -> Self {
        Self {
            args: args.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

impl Block {
    pub fn new(statements: impl IntoIterator<Item = Expr>) -> Self {
        Self {
            statements: statements.into_iter().collect::<Vec<_>>(),
        }
    }
}
