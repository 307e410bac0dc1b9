//! Per-unit code generation state: the instruction stream, the register
//! namespace, and the inferred type tag of each register.

use core::fmt;

use hashbrown::HashMap;

use crate::{String, Vec};

/// A temporary in the generated code. Renders as `tmp__N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Register(u32);

impl Register {
    pub fn number(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tmp__{}", self.0)
    }
}

/// Approximate runtime classification of the value held in a register.
///
/// Each tag maps 1:1 onto a runtime object pointer type and selects the cast
/// applied whenever the register is passed to a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeTag {
    Int,
    String,
    Boolean,
    /// Generic or unknown object.
    Object,
}

impl TypeTag {
    pub const ALL: [TypeTag; 4] = [
        TypeTag::Int,
        TypeTag::String,
        TypeTag::Boolean,
        TypeTag::Object,
    ];

    /// The runtime pointer type for values with this tag.
    pub fn c_type(self) -> &'static str {
        match self {
            TypeTag::Int => "obj_Int",
            TypeTag::String => "obj_String",
            TypeTag::Boolean => "obj_Boolean",
            TypeTag::Object => "obj_Obj",
        }
    }

    /// Tag of an instance of the named class. Only the tagged built-ins get a
    /// tag of their own; everything else is `Object`.
    pub fn of_class(name: &str) -> TypeTag {
        match name {
            "Int" => TypeTag::Int,
            "String" => TypeTag::String,
            "Boolean" => TypeTag::Boolean,
            _ => TypeTag::Object,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeTag::Int => "Int",
            TypeTag::String => "String",
            TypeTag::Boolean => "Boolean",
            TypeTag::Object => "Obj",
        };
        f.write_str(name)
    }
}

/// Code generation state for one unit (a method body or the top-level
/// statements).
///
/// Registers are never freed or reused: every subexpression gets a fresh one.
/// Tags are only ever added or overwritten.
#[derive(Debug, Default)]
pub struct CodegenContext {
    instructions: Vec<String>,
    next_register: u32,
    register_types: HashMap<u32, TypeTag>,
}

impl CodegenContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a register that has never been handed out by this context.
    pub fn allocate_register(&mut self) -> Register {
        let reg = Register(self.next_register);
        self.next_register += 1;
        tracing::trace!(register = %reg, "Allocated register");
        reg
    }

    /// The most recently allocated register, if any.
    pub fn current_register(&self) -> Option<Register> {
        self.next_register.checked_sub(1).map(Register)
    }

    /// Number of registers allocated so far.
    pub fn register_count(&self) -> u32 {
        self.next_register
    }

    pub fn set_register_type(&mut self, reg: Register, tag: TypeTag) {
        self.register_types.insert(reg.0, tag);
    }

    /// Tag of `reg`, treating a register with no recorded tag as `Object`.
    pub fn register_type(&self, reg: Register) -> TypeTag {
        self.recorded_type(reg).unwrap_or(TypeTag::Object)
    }

    /// Tag of `reg` only if one was recorded. A register without a tag was
    /// never written by any emitted instruction.
    pub fn recorded_type(&self, reg: Register) -> Option<TypeTag> {
        self.register_types.get(&reg.0).copied()
    }

    /// Append one instruction line. The text is not validated.
    pub fn emit(&mut self, instruction: impl Into<String>) {
        let instruction = instruction.into();
        tracing::trace!(%instruction, "Emit");
        self.instructions.push(instruction);
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    pub fn into_instructions(self) -> Vec<String> {
        self.instructions
    }
}
