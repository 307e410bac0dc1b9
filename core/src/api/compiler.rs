//! The Quack compiler driver.

use core::fmt;

use super::{CompileOptions, Error};
use crate::ast::{Block, Program};
use crate::codegen::{CodegenResult, DispatchTable, Generator, Register};
use crate::{String, Vec, format};

/// Lowers programs into instruction listings.
///
/// The dispatch table is borrowed so that callers describing a larger
/// runtime can share one table across compilers.
///
/// # Example
///
/// ```
/// use quack_core::api::{CompileOptions, Compiler};
/// use quack_core::ast::{Block, Expr};
/// use quack_core::codegen::{DispatchTable, TypeTag};
///
/// let table = DispatchTable::builtin()
///     .clone()
///     .with_method(TypeTag::Int, "MINUS", TypeTag::Int);
/// let compiler = Compiler::with_table(&table, CompileOptions::default());
///
/// let unit = compiler
///     .compile_block(&Block::new([Expr::call(Expr::int(5), "MINUS", [Expr::int(2)])]))
///     .unwrap();
/// assert_eq!(
///     unit.instructions.last().unwrap(),
///     "tmp__2 = (obj_Obj) ((obj_Int) tmp__0)->clazz->MINUS((obj_Int) tmp__0, (obj_Int) tmp__1);"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Compiler<'t> {
    table: &'t DispatchTable,
    options: CompileOptions,
}

impl Compiler<'static> {
    /// Create a compiler against the built-in runtime classes.
    pub fn new(options: CompileOptions) -> Self {
        Self::with_table(DispatchTable::builtin(), options)
    }
}

impl<'t> Compiler<'t> {
    pub fn with_table(table: &'t DispatchTable, options: CompileOptions) -> Self {
        Self { table, options }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn table(&self) -> &'t DispatchTable {
        self.table
    }

    /// Compile every unit of `program`.
    ///
    /// Units are `main` for the top-level statements, then for each class
    /// `<Class>_constructor` followed by `<Class>_method_<name>` per method.
    /// The first failing unit aborts the whole compile.
    pub fn compile(&self, program: &Program) -> Result<Listing, Error> {
        let mut units = Vec::with_capacity(1 + program.classes.len());
        units.push(self.unit(String::from(MAIN_UNIT), |g| g.gen_program(program))?);

        for class in &program.classes {
            units.push(self.unit(format!("{}_constructor", class.name), |g| {
                g.gen_method(&class.constructor)
            })?);
            for method in &class.methods {
                units.push(self.unit(
                    format!("{}_method_{}", class.name, method.name),
                    |g| g.gen_method(method),
                )?);
            }
        }

        Ok(Listing { units })
    }

    /// Compile a lone block as the `main` unit.
    pub fn compile_block(&self, block: &Block) -> Result<Unit, Error> {
        self.unit(String::from(MAIN_UNIT), |g| {
            let target = g.allocate_target();
            g.gen_block(block, target)
        })
    }

    fn unit(
        &self,
        name: String,
        lower: impl FnOnce(&mut Generator<'t>) -> CodegenResult<Register>,
    ) -> Result<Unit, Error> {
        tracing::debug!(unit = %name, "Compiling unit");

        let mut generator = Generator::new(self.table, self.options.codegen());
        match lower(&mut generator) {
            Ok(result) => {
                let instructions = generator.into_context().into_instructions();
                tracing::debug!(unit = %name, instructions = instructions.len(), "Unit compiled");
                Ok(Unit {
                    name,
                    instructions,
                    result,
                })
            }
            Err(err) => {
                tracing::debug!(unit = %name, error = %err, "Unit failed");
                Err(Error::codegen(name, &err))
            }
        }
    }
}

/// Name of the unit holding the top-level statements.
pub const MAIN_UNIT: &str = "main";

/// The lowered instructions of one method body or of the top level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub name: String,
    pub instructions: Vec<String>,
    /// Register holding the value of the last statement.
    pub result: Register,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "// {}", self.name)?;
        for instruction in &self.instructions {
            write!(f, "\n{}", instruction)?;
        }
        Ok(())
    }
}

/// All units of a compiled program, in compile order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub units: Vec<Unit>,
}

impl Listing {
    pub fn unit(&self, name: &str) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.name == name)
    }

    /// Total number of instructions across all units.
    pub fn instruction_count(&self) -> usize {
        self.units.iter().map(|unit| unit.instructions.len()).sum()
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, unit) in self.units.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{}", unit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "compiler_test.rs"]
mod compiler_test;
