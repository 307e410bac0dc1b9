//! Tree-dump: renders an AST as nested JSON objects for debugging.
//!
//! Every object starts with its `kind`, followed by named child fields, one
//! per line. Each nesting level adds one indentation step. The last field of
//! an object and the last element of a list carry no trailing separator, so
//! the output is valid JSON and reads back through `serde` into the same tree.

use core::fmt::{self, Write};

use super::{Actuals, Block, Class, Expr, Formal, Ident, Method, Program, TypeAlternative};
use crate::String;

const INDENT: &str = "    ";

/// Formatting state threaded through a dump: the current nesting depth.
#[derive(Debug, Clone, Default)]
pub struct PrintContext {
    indent: usize,
}

impl PrintContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent below zero");
        self.indent = self.indent.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.indent
    }
}

/// Nodes that can render themselves as a tree-dump.
pub trait TreeDump {
    /// The `kind` tag written at the head of the node's object.
    fn kind(&self) -> &'static str;

    fn dump(&self, out: &mut dyn Write, ctx: &mut PrintContext) -> fmt::Result;
}

/// Dump a node into a fresh string, starting at depth zero.
pub fn to_string(node: &dyn TreeDump) -> String {
    let mut out = String::new();
    let mut ctx = PrintContext::new();
    // Writing into a String never fails.
    let _ = node.dump(&mut out, &mut ctx);
    out
}

// === Output helpers ===

fn newline(out: &mut dyn Write, ctx: &PrintContext) -> fmt::Result {
    out.write_char('\n')?;
    for _ in 0..ctx.depth() {
        out.write_str(INDENT)?;
    }
    Ok(())
}

/// `{ "kind": "<kind>"`, then one level deeper for the fields.
fn head(kind: &str, out: &mut dyn Write, ctx: &mut PrintContext) -> fmt::Result {
    write!(out, "{{ \"kind\": \"{kind}\"")?;
    ctx.indent();
    Ok(())
}

fn close(out: &mut dyn Write, ctx: &mut PrintContext) -> fmt::Result {
    ctx.dedent();
    newline(out, ctx)?;
    out.write_char('}')
}

/// Separator from the previous field, then `"<name>": `.
fn key(name: &str, out: &mut dyn Write, ctx: &PrintContext) -> fmt::Result {
    out.write_char(',')?;
    newline(out, ctx)?;
    write!(out, "\"{name}\": ")
}

fn child(
    name: &str,
    node: &dyn TreeDump,
    out: &mut dyn Write,
    ctx: &mut PrintContext,
) -> fmt::Result {
    key(name, out, ctx)?;
    node.dump(out, ctx)
}

fn list<T: TreeDump>(
    name: &str,
    items: &[T],
    out: &mut dyn Write,
    ctx: &mut PrintContext,
) -> fmt::Result {
    key(name, out, ctx)?;
    if items.is_empty() {
        return out.write_str("[]");
    }
    out.write_char('[')?;
    ctx.indent();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.write_char(',')?;
        }
        newline(out, ctx)?;
        item.dump(out, ctx)?;
    }
    ctx.dedent();
    newline(out, ctx)?;
    out.write_char(']')
}

fn text(name: &str, value: &str, out: &mut dyn Write, ctx: &PrintContext) -> fmt::Result {
    key(name, out, ctx)?;
    write_json_string(out, value)
}

fn write_json_string(out: &mut dyn Write, value: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if (c as u32) < 0x20 => write!(out, "\\u{:04x}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

// === Node implementations ===

impl TreeDump for Program {
    fn kind(&self) -> &'static str {
        "Program"
    }

    fn dump(&self, out: &mut dyn Write, ctx: &mut PrintContext) -> fmt::Result {
        head(self.kind(), out, ctx)?;
        list("classes", &self.classes, out, ctx)?;
        child("statements", &self.statements, out, ctx)?;
        close(out, ctx)
    }
}

impl TreeDump for Class {
    fn kind(&self) -> &'static str {
        "Class"
    }

    fn dump(&self, out: &mut dyn Write, ctx: &mut PrintContext) -> fmt::Result {
        head(self.kind(), out, ctx)?;
        child("name", &self.name, out, ctx)?;
        child("super", &self.superclass, out, ctx)?;
        child("constructor", &self.constructor, out, ctx)?;
        list("methods", &self.methods, out, ctx)?;
        close(out, ctx)
    }
}

impl TreeDump for Method {
    fn kind(&self) -> &'static str {
        "Method"
    }

    fn dump(&self, out: &mut dyn Write, ctx: &mut PrintContext) -> fmt::Result {
        head(self.kind(), out, ctx)?;
        child("name", &self.name, out, ctx)?;
        list("formals", &self.formals, out, ctx)?;
        child("returns", &self.returns, out, ctx)?;
        child("body", &self.body, out, ctx)?;
        close(out, ctx)
    }
}

impl TreeDump for Formal {
    fn kind(&self) -> &'static str {
        "Formal"
    }

    fn dump(&self, out: &mut dyn Write, ctx: &mut PrintContext) -> fmt::Result {
        head(self.kind(), out, ctx)?;
        child("var", &self.var, out, ctx)?;
        child("type", &self.ty, out, ctx)?;
        close(out, ctx)
    }
}

impl TreeDump for Block {
    fn kind(&self) -> &'static str {
        "Block"
    }

    fn dump(&self, out: &mut dyn Write, ctx: &mut PrintContext) -> fmt::Result {
        head(self.kind(), out, ctx)?;
        list("statements", &self.statements, out, ctx)?;
        close(out, ctx)
    }
}

impl TreeDump for Actuals {
    fn kind(&self) -> &'static str {
        "Actuals"
    }

    fn dump(&self, out: &mut dyn Write, ctx: &mut PrintContext) -> fmt::Result {
        head(self.kind(), out, ctx)?;
        list("args", &self.args, out, ctx)?;
        close(out, ctx)
    }
}

impl TreeDump for TypeAlternative {
    fn kind(&self) -> &'static str {
        "TypeAlternative"
    }

    fn dump(&self, out: &mut dyn Write, ctx: &mut PrintContext) -> fmt::Result {
        head(self.kind(), out, ctx)?;
        child("ident", &self.ident, out, ctx)?;
        child("classname", &self.classname, out, ctx)?;
        child("block", &self.block, out, ctx)?;
        close(out, ctx)
    }
}

impl TreeDump for Ident {
    fn kind(&self) -> &'static str {
        "Ident"
    }

    // Identifiers are leaves and stay on one line.
    fn dump(&self, out: &mut dyn Write, _ctx: &mut PrintContext) -> fmt::Result {
        write!(out, "{{ \"kind\": \"Ident\", \"text\": ")?;
        write_json_string(out, &self.text)?;
        out.write_str(" }")
    }
}

impl TreeDump for Expr {
    fn kind(&self) -> &'static str {
        match self {
            Expr::IntConst { .. } => "IntConst",
            Expr::StrConst { .. } => "StrConst",
            Expr::Ident(_) => "Ident",
            Expr::Load { .. } => "Load",
            Expr::BinOp { .. } => "BinOp",
            Expr::Not { .. } => "Not",
            Expr::Call { .. } => "Call",
            Expr::Construct { .. } => "Construct",
            Expr::Dot { .. } => "Dot",
            Expr::Assign { .. } => "Assign",
            Expr::AssignDeclare { .. } => "AssignDeclare",
            Expr::If { .. } => "If",
            Expr::While { .. } => "While",
            Expr::Typecase { .. } => "Typecase",
            Expr::Return { .. } => "Return",
            Expr::Stub { .. } => "Stub",
        }
    }

    fn dump(&self, out: &mut dyn Write, ctx: &mut PrintContext) -> fmt::Result {
        let kind = self.kind();
        match self {
            Expr::Ident(ident) => return ident.dump(out, ctx),
            Expr::IntConst { value } => {
                head(kind, out, ctx)?;
                key("value", out, ctx)?;
                write!(out, "{value}")?;
            }
            Expr::StrConst { value } => {
                head(kind, out, ctx)?;
                text("value", value, out, ctx)?;
            }
            Expr::Load { loc } => {
                head(kind, out, ctx)?;
                child("loc", loc.as_ref(), out, ctx)?;
            }
            Expr::BinOp { op, left, right } => {
                head(kind, out, ctx)?;
                text("op", op.symbol(), out, ctx)?;
                child("left", left.as_ref(), out, ctx)?;
                child("right", right.as_ref(), out, ctx)?;
            }
            Expr::Not { operand } => {
                head(kind, out, ctx)?;
                child("operand", operand.as_ref(), out, ctx)?;
            }
            Expr::Call {
                receiver,
                method,
                actuals,
            } => {
                head(kind, out, ctx)?;
                child("receiver", receiver.as_ref(), out, ctx)?;
                child("method", method, out, ctx)?;
                child("actuals", actuals, out, ctx)?;
            }
            Expr::Construct { class, actuals } => {
                head(kind, out, ctx)?;
                child("class", class, out, ctx)?;
                child("actuals", actuals, out, ctx)?;
            }
            Expr::Dot { left, right } => {
                head(kind, out, ctx)?;
                child("left", left.as_ref(), out, ctx)?;
                child("right", right, out, ctx)?;
            }
            Expr::Assign { lexpr, rexpr } => {
                head(kind, out, ctx)?;
                child("lexpr", lexpr.as_ref(), out, ctx)?;
                child("rexpr", rexpr.as_ref(), out, ctx)?;
            }
            Expr::AssignDeclare {
                lexpr,
                rexpr,
                static_type,
            } => {
                head(kind, out, ctx)?;
                child("lexpr", lexpr.as_ref(), out, ctx)?;
                child("rexpr", rexpr.as_ref(), out, ctx)?;
                child("static_type", static_type, out, ctx)?;
            }
            Expr::If {
                cond,
                then_part,
                else_part,
            } => {
                head(kind, out, ctx)?;
                child("cond", cond.as_ref(), out, ctx)?;
                child("then_part", then_part, out, ctx)?;
                child("else_part", else_part, out, ctx)?;
            }
            Expr::While { cond, body } => {
                head(kind, out, ctx)?;
                child("cond", cond.as_ref(), out, ctx)?;
                child("body", body, out, ctx)?;
            }
            Expr::Typecase { expr, cases } => {
                head(kind, out, ctx)?;
                child("expr", expr.as_ref(), out, ctx)?;
                list("cases", cases, out, ctx)?;
            }
            Expr::Return { expr } => {
                head(kind, out, ctx)?;
                child("expr", expr.as_ref(), out, ctx)?;
            }
            Expr::Stub { rule } => {
                head(kind, out, ctx)?;
                text("rule", rule, out, ctx)?;
            }
        }
        close(out, ctx)
    }
}
