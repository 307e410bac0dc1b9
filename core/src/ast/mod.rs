//! Abstract syntax tree for Quack programs.
//!
//! The tree is handed to us fully parsed. Every composite node owns its
//! children exclusively, and every list keeps source order: argument order and
//! statement order are both significant.
//!
//! All executable constructs (literals, operators, calls, statements) live in
//! the single closed enum [`Expr`], so both tree-dump and code generation
//! match on it exhaustively. Adding a construct means adding a variant here,
//! and the compiler then points at every place that has to learn about it.
//!
//! Nodes derive `serde` with an internally tagged `kind` field. The output of
//! [`dump`] uses the same shape, so a dumped tree can be read back in.

pub mod dump;
pub mod factory;

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{Box, String, Vec};

pub use dump::{PrintContext, TreeDump};

/// A whole compilation unit: class definitions followed by the top-level
/// statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub classes: Vec<Class>,
    pub statements: Block,
}

/// `class Name(formals) extends Super { constructor body; methods }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub name: Ident,
    #[serde(rename = "super")]
    pub superclass: Ident,
    pub constructor: Method,
    pub methods: Vec<Method>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: Ident,
    pub formals: Vec<Formal>,
    pub returns: Ident,
    pub body: Block,
}

/// A formal parameter, `var: Type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formal {
    pub var: Ident,
    #[serde(rename = "type")]
    pub ty: Ident,
}

/// Ordered statement sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub statements: Vec<Expr>,
}

/// Ordered actual arguments of a call or construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actuals {
    pub args: Vec<Expr>,
}

/// One arm of a `typecase`: `ident: ClassName { block }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAlternative {
    pub ident: Ident,
    pub classname: Ident,
    pub block: Block,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ident {
    pub text: String,
}

impl Ident {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Expressions and statements.
///
/// A statement is an expression evaluated for its effect; its value is
/// whatever register its lowering leaves behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Expr {
    // === Literals ===
    /// Runtime integers are C `int`, so wider literals are rejected on input.
    IntConst {
        value: i32,
    },
    StrConst {
        value: String,
    },

    // === Names ===
    Ident(Ident),
    /// Read of a previously bound location (an identifier or a field).
    Load {
        loc: Box<Expr>,
    },

    // === Operators ===
    BinOp {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Not {
        operand: Box<Expr>,
    },

    // === Composite expressions ===
    /// `receiver.method(actuals)`
    Call {
        receiver: Box<Expr>,
        method: Ident,
        actuals: Actuals,
    },
    /// `Class(actuals)`
    Construct {
        class: Ident,
        actuals: Actuals,
    },
    /// `left.right`
    Dot {
        left: Box<Expr>,
        right: Ident,
    },

    // === Statements ===
    Assign {
        lexpr: Box<Expr>,
        rexpr: Box<Expr>,
    },
    /// `lexpr: StaticType = rexpr`
    AssignDeclare {
        lexpr: Box<Expr>,
        rexpr: Box<Expr>,
        static_type: Ident,
    },
    If {
        cond: Box<Expr>,
        then_part: Block,
        else_part: Block,
    },
    While {
        cond: Box<Expr>,
        body: Block,
    },
    Typecase {
        expr: Box<Expr>,
        cases: Vec<TypeAlternative>,
    },
    Return {
        expr: Box<Expr>,
    },

    /// Placeholder for a grammar production with no richer representation.
    Stub {
        rule: String,
    },
}

/// Binary operators. Each one is sugar for a method call on the left operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "*")]
    Times,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "==")]
    Equals,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "<=")]
    AtMost,
    #[serde(rename = ">")]
    More,
    #[serde(rename = ">=")]
    AtLeast,
}

impl BinaryOp {
    /// Source symbol, as written in Quack.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Times => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Equals => "==",
            BinaryOp::Less => "<",
            BinaryOp::AtMost => "<=",
            BinaryOp::More => ">",
            BinaryOp::AtLeast => ">=",
        }
    }

    /// Name of the runtime method the operator is rewritten to.
    pub fn method_name(self) -> &'static str {
        match self {
            BinaryOp::Plus => "PLUS",
            BinaryOp::Minus => "MINUS",
            BinaryOp::Times => "TIMES",
            BinaryOp::Divide => "DIVIDE",
            BinaryOp::Equals => "EQUALS",
            BinaryOp::Less => "LESS",
            BinaryOp::AtMost => "ATMOST",
            BinaryOp::More => "MORE",
            BinaryOp::AtLeast => "ATLEAST",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Method name that `not e` is rewritten to.
pub const NOT_METHOD: &str = "NOT";
