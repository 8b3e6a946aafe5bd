use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque token naming the structural type a schema describes.
///
/// The schema carries it for diagnostics and never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeIdentity(String);

impl TypeIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeIdentity {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeIdentity {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Schema kinds of the model space.
///
/// Only `Struct` schemas are modeled here; scalar, collection and map schemas
/// belong to other components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    Struct,
}

impl SchemaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SchemaKind::Struct => "struct",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
