//! Lowering of AST nodes into register-machine instructions.

use core::slice;

use super::context::{CodegenContext, Register, TypeTag};
use super::dispatch::DispatchTable;
use super::error::{CodegenError, CodegenResult, Position};
use super::literal::c_string_literal;
use crate::ast::{Actuals, Block, Expr, Ident, Method, NOT_METHOD, Program, TreeDump};
use crate::{String, ToString, Vec, format};

/// How strictly the generator treats gaps in what it knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodegenOptions {
    /// Fail when a register that no instruction wrote is used as an operand.
    /// When relaxed, such a register is cast as `obj_Obj`.
    pub strict_registers: bool,
    /// Fail when the dispatch table has no entry for a call. When relaxed,
    /// the call's result is tagged `Object`.
    pub strict_methods: bool,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            strict_registers: true,
            strict_methods: true,
        }
    }
}

impl CodegenOptions {
    /// Both checks relaxed.
    pub fn lenient() -> Self {
        Self {
            strict_registers: false,
            strict_methods: false,
        }
    }
}

/// Code generator for one unit.
///
/// Lowering is a single depth-first walk. Each `gen_*` method is given a
/// target register and returns the register that actually holds the node's
/// value: literals write into the target, calls and constructions allocate a
/// fresh result register, and loads leave the target unwritten.
pub struct Generator<'t> {
    ctx: CodegenContext,
    table: &'t DispatchTable,
    options: CodegenOptions,
}

impl<'t> Generator<'t> {
    pub fn new(table: &'t DispatchTable, options: CodegenOptions) -> Self {
        Self {
            ctx: CodegenContext::new(),
            table,
            options,
        }
    }

    pub fn context(&self) -> &CodegenContext {
        &self.ctx
    }

    pub fn into_context(self) -> CodegenContext {
        self.ctx
    }

    /// Allocate a register for a caller that lowers into it directly.
    pub fn allocate_target(&mut self) -> Register {
        self.ctx.allocate_register()
    }

    /// Lower the top-level statements. Class bodies are lowered per method
    /// with [`gen_method`](Self::gen_method).
    pub fn gen_program(&mut self, program: &Program) -> CodegenResult<Register> {
        tracing::debug!(
            statements = program.statements.statements.len(),
            "Lowering top-level statements"
        );
        let target = self.allocate_target();
        self.gen_block(&program.statements, target)
    }

    /// Lower a method body.
    pub fn gen_method(&mut self, method: &Method) -> CodegenResult<Register> {
        tracing::debug!(method = %method.name, "Lowering method body");
        let target = self.ctx.allocate_register();
        self.gen_block(&method.body, target)
    }

    /// Lower `expr` into a freshly allocated target register.
    pub fn gen_rvalue(&mut self, expr: &Expr) -> CodegenResult<Register> {
        let target = self.ctx.allocate_register();
        self.gen_expr(expr, target)
    }

    /// Lower statements in order. Each statement gets its own target, so no
    /// statement aliases the temporaries of the one before. The block's value
    /// is the last statement's register.
    pub fn gen_block(&mut self, block: &Block, target: Register) -> CodegenResult<Register> {
        let mut target = target;
        let mut last = target;
        for statement in &block.statements {
            last = self.gen_expr(statement, target)?;
            target = self.ctx.allocate_register();
        }
        Ok(last)
    }

    /// Lower each argument into its own fresh register, returning the
    /// registers holding the values in argument order.
    pub fn gen_actuals(&mut self, actuals: &Actuals) -> CodegenResult<Vec<Register>> {
        self.gen_args(&actuals.args)
    }

    pub fn gen_expr(&mut self, expr: &Expr, target: Register) -> CodegenResult<Register> {
        match expr {
            Expr::IntConst { value } => {
                self.ctx.set_register_type(target, TypeTag::Int);
                self.ctx.emit(format!("{target} = int_literal({value});"));
                Ok(target)
            }
            Expr::StrConst { value } => {
                self.ctx.set_register_type(target, TypeTag::String);
                self.ctx
                    .emit(format!("{target} = str_literal({});", c_string_literal(value)));
                Ok(target)
            }

            // Local variable storage belongs to the backend; a load produces
            // no instruction and leaves `target` unwritten.
            Expr::Ident(_) | Expr::Load { .. } => {
                tracing::trace!(register = %target, "Load left to the backend");
                Ok(target)
            }

            Expr::BinOp { op, left, right } => {
                self.gen_call(left, op.method_name(), slice::from_ref(right.as_ref()), target)
            }
            Expr::Not { operand } => self.gen_call(operand, NOT_METHOD, &[], target),
            Expr::Dot { left, right } => self.gen_call(left, right.as_str(), &[], target),
            Expr::Call {
                receiver,
                method,
                actuals,
            } => self.gen_call(receiver, method.as_str(), &actuals.args, target),
            Expr::Construct { class, actuals } => self.gen_construct(class, actuals),

            // The left-hand side is bound by the backend.
            Expr::Assign { rexpr, .. } | Expr::AssignDeclare { rexpr, .. } => {
                self.gen_expr(rexpr, target)
            }

            Expr::Return { expr } => {
                let value = self.gen_expr(expr, target)?;
                self.operand_type(value, "return", Position::Operand)?;
                self.ctx.emit(format!("return (obj_Obj) {value};"));
                Ok(value)
            }

            Expr::If { .. } | Expr::While { .. } | Expr::Typecase { .. } | Expr::Stub { .. } => {
                Err(CodegenError::UnsupportedNode { kind: expr.kind() })
            }
        }
    }

    /// Lower `receiver.method(args)` as an indirect call through the
    /// receiver's method table.
    ///
    /// The receiver is passed again as the explicit first parameter, and
    /// every operand is cast to the pointer type of its register's tag. The
    /// result lands in a fresh register tagged from the dispatch table.
    pub fn gen_call(
        &mut self,
        receiver: &Expr,
        method: &str,
        args: &[Expr],
        target: Register,
    ) -> CodegenResult<Register> {
        let receiver_reg = self.gen_expr(receiver, target)?;
        let receiver_tag = self.operand_type(receiver_reg, method, Position::Receiver)?;
        let receiver_part = cast(receiver_tag, receiver_reg);

        let arg_regs = self.gen_args(args)?;
        let mut operands = Vec::with_capacity(arg_regs.len() + 1);
        operands.push(receiver_part.clone());
        for (index, &reg) in arg_regs.iter().enumerate() {
            let tag = self.operand_type(reg, method, Position::Argument(index))?;
            operands.push(cast(tag, reg));
        }

        let result_tag = self.result_type(receiver_tag, method)?;
        let result = self.ctx.allocate_register();
        self.ctx.set_register_type(result, result_tag);
        self.ctx.emit(format!(
            "{result} = (obj_Obj) ({receiver_part})->clazz->{method}({});",
            operands.join(", ")
        ));
        Ok(result)
    }

    /// Lower `Class(args)` as a call of the class's constructor slot.
    fn gen_construct(&mut self, class: &Ident, actuals: &Actuals) -> CodegenResult<Register> {
        let arg_regs = self.gen_args(&actuals.args)?;
        let mut operands = Vec::with_capacity(arg_regs.len());
        for (index, &reg) in arg_regs.iter().enumerate() {
            let tag = self.operand_type(reg, class.as_str(), Position::Argument(index))?;
            operands.push(cast(tag, reg));
        }

        let result = self.ctx.allocate_register();
        self.ctx
            .set_register_type(result, TypeTag::of_class(class.as_str()));
        self.ctx.emit(format!(
            "{result} = (obj_Obj) the_class_{class}->constructor({});",
            operands.join(", ")
        ));
        Ok(result)
    }

    fn gen_args(&mut self, args: &[Expr]) -> CodegenResult<Vec<Register>> {
        let mut regs = Vec::with_capacity(args.len());
        for arg in args {
            let target = self.ctx.allocate_register();
            regs.push(self.gen_expr(arg, target)?);
        }
        Ok(regs)
    }

    /// Tag of a register about to be used as an operand.
    fn operand_type(
        &self,
        reg: Register,
        method: &str,
        position: Position,
    ) -> CodegenResult<TypeTag> {
        match self.ctx.recorded_type(reg) {
            Some(tag) => Ok(tag),
            None if self.options.strict_registers => Err(CodegenError::UnboundRegisterType {
                method: method.to_string(),
                position,
                register: reg,
            }),
            None => {
                tracing::warn!(register = %reg, method, %position, "Unbound register cast as Obj");
                Ok(TypeTag::Object)
            }
        }
    }

    fn result_type(&self, receiver: TypeTag, method: &str) -> CodegenResult<TypeTag> {
        match self.table.lookup(receiver, method) {
            Some(tag) => Ok(tag),
            None if self.options.strict_methods => Err(CodegenError::UnknownBuiltinMethod {
                receiver,
                method: method.to_string(),
            }),
            None => {
                tracing::warn!(%receiver, method, "Unknown method, result tagged Obj");
                Ok(TypeTag::Object)
            }
        }
    }
}

fn cast(tag: TypeTag, reg: Register) -> String {
    format!("({}) {reg}", tag.c_type())
}
