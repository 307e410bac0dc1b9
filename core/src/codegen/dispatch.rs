//! Result types of the built-in runtime methods.
//!
//! Every runtime object points at a per-class method table. The generator
//! needs to know, for a receiver tag and a method name, what kind of object
//! comes back, so the result register can be tagged and cast correctly on its
//! next use. The table here is plain data and can be extended or replaced
//! per compiler instance.

use hashbrown::HashMap;
use lazy_static::lazy_static;

use super::context::TypeTag;
use crate::{String, ToString};

/// The runtime-provided classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinClass {
    Obj,
    Int,
    String,
    Boolean,
    Nothing,
}

impl BuiltinClass {
    pub const ALL: [BuiltinClass; 5] = [
        BuiltinClass::Obj,
        BuiltinClass::Int,
        BuiltinClass::String,
        BuiltinClass::Boolean,
        BuiltinClass::Nothing,
    ];

    pub fn from_name(name: &str) -> Option<BuiltinClass> {
        Self::ALL.into_iter().find(|class| class.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            BuiltinClass::Obj => "Obj",
            BuiltinClass::Int => "Int",
            BuiltinClass::String => "String",
            BuiltinClass::Boolean => "Boolean",
            BuiltinClass::Nothing => "Nothing",
        }
    }

    /// The register tag of an instance of this class.
    pub fn tag(self) -> TypeTag {
        match self {
            BuiltinClass::Int => TypeTag::Int,
            BuiltinClass::String => TypeTag::String,
            BuiltinClass::Boolean => TypeTag::Boolean,
            BuiltinClass::Obj | BuiltinClass::Nothing => TypeTag::Object,
        }
    }

    /// Method table slots after `constructor`, in table order, with the
    /// class each one returns. Inherited slots are listed with the signature
    /// the class actually exposes.
    pub fn methods(self) -> &'static [(&'static str, BuiltinClass)] {
        use BuiltinClass as C;
        match self {
            C::Obj => &[("STRING", C::String), ("PRINT", C::Obj), ("EQUALS", C::Boolean)],
            C::String => &[
                ("STRING", C::String),
                ("PRINT", C::String),
                ("EQUALS", C::Boolean),
                ("LESS", C::Boolean),
            ],
            C::Boolean => &[("STRING", C::String), ("PRINT", C::Obj), ("EQUALS", C::Boolean)],
            C::Nothing => &[("STRING", C::String), ("PRINT", C::Obj), ("EQUALS", C::Boolean)],
            C::Int => &[
                ("STRING", C::String),
                ("PRINT", C::Obj),
                ("EQUALS", C::Boolean),
                ("LESS", C::Boolean),
                ("PLUS", C::Int),
            ],
        }
    }
}

lazy_static! {
    static ref BUILTIN_TABLE: DispatchTable = DispatchTable::from_builtins();
}

/// Maps `(receiver tag, method name)` to the tag of the call's result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchTable {
    methods: HashMap<(TypeTag, String), TypeTag>,
}

impl DispatchTable {
    /// An empty table: every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared table of built-in method signatures.
    pub fn builtin() -> &'static DispatchTable {
        &BUILTIN_TABLE
    }

    fn from_builtins() -> Self {
        let mut table = Self::new();
        // `Nothing` has no tag of its own; its receivers are `Object`, which
        // `Obj` already covers.
        for class in [
            BuiltinClass::Obj,
            BuiltinClass::Int,
            BuiltinClass::String,
            BuiltinClass::Boolean,
        ] {
            for &(method, returns) in class.methods() {
                table.insert(class.tag(), method, returns.tag());
            }
        }
        table
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_method(mut self, receiver: TypeTag, method: &str, result: TypeTag) -> Self {
        self.insert(receiver, method, result);
        self
    }

    pub fn insert(&mut self, receiver: TypeTag, method: &str, result: TypeTag) {
        self.methods.insert((receiver, method.to_string()), result);
    }

    /// Result tag of `method` on a receiver tagged `receiver`, or `None` if
    /// the table has no such entry.
    pub fn lookup(&self, receiver: TypeTag, method: &str) -> Option<TypeTag> {
        // TODO: key the map by `(TypeTag, &str)` through `Equivalent` to skip
        // this allocation per lookup.
        self.methods.get(&(receiver, method.to_string())).copied()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// All entries, sorted by receiver tag then method name.
    pub fn entries(&self) -> crate::Vec<(TypeTag, &str, TypeTag)> {
        let mut entries: crate::Vec<_> = self
            .methods
            .iter()
            .map(|((receiver, method), result)| (*receiver, method.as_str(), *result))
            .collect();
        entries.sort();
        entries
    }
}
