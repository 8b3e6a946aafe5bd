use crate::identity::TypeIdentity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared value kind of a property.
///
/// Only the primitive `Boolean` kind may be declared through more than one
/// getter (`getX` and `isX`); a nullable boolean is an ordinary value kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Boolean,
    OptionalBoolean,
    Integer,
    Long,
    Float,
    Double,
    String,
    /// A nested structural type.
    Struct(TypeIdentity),
    /// Any other declared type, carried by name.
    Other(TypeIdentity),
}

impl ValueKind {
    pub fn is_boolean(&self) -> bool {
        matches!(self, ValueKind::Boolean)
    }

    pub fn type_name(&self) -> &str {
        match self {
            ValueKind::Boolean => "boolean",
            ValueKind::OptionalBoolean => "boolean?",
            ValueKind::Integer => "int",
            ValueKind::Long => "long",
            ValueKind::Float => "float",
            ValueKind::Double => "double",
            ValueKind::String => "string",
            ValueKind::Struct(t) | ValueKind::Other(t) => t.as_str(),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Accessor form a property declaration was extracted from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessorKind {
    #[default]
    Get,
    Is,
    Set,
}

impl AccessorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AccessorKind::Get => "get",
            AccessorKind::Is => "is",
            AccessorKind::Set => "set",
        }
    }
}

/// Metadata for one named, typed property of a structural type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,

    #[serde(rename = "kind")]
    pub value_kind: ValueKind,

    #[serde(default)]
    pub accessor: AccessorKind,

    #[serde(default)]
    pub writable: bool,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, value_kind: ValueKind) -> Self {
        Self {
            name: name.into(),
            value_kind,
            accessor: AccessorKind::Get,
            writable: false,
        }
    }

    /// A read-only primitive boolean property declared through `getX`.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, ValueKind::Boolean)
    }

    pub fn with_accessor(mut self, accessor: AccessorKind) -> Self {
        self.accessor = accessor;
        self
    }

    pub fn writable(mut self) -> Self {
        self.writable = true;
        self
    }

    pub fn is_boolean(&self) -> bool {
        self.value_kind.is_boolean()
    }
}
