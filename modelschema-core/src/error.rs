//! Error types for schema construction.
//!
//! Both variants are raised only while building a schema and abort that build.
//! Queries against a built schema never fail.

use crate::aspect::AspectKind;
use modelschema_types::TypeIdentity;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A non-boolean property name was declared more than once.
    #[error(
        "duplicate property '{name}' found in {type_identity}; only boolean properties may have two getters"
    )]
    DuplicateProperty {
        type_identity: TypeIdentity,
        name: String,
    },

    /// An aspect kind was supplied more than once.
    #[error("duplicate aspect {kind} supplied for {type_identity}")]
    DuplicateAspect {
        type_identity: TypeIdentity,
        kind: AspectKind,
    },
}

impl SchemaError {
    /// The type whose schema failed to build.
    pub fn type_identity(&self) -> &TypeIdentity {
        match self {
            SchemaError::DuplicateProperty { type_identity, .. }
            | SchemaError::DuplicateAspect { type_identity, .. } => type_identity,
        }
    }

    pub fn property_name(&self) -> Option<&str> {
        match self {
            SchemaError::DuplicateProperty { name, .. } => Some(name),
            SchemaError::DuplicateAspect { .. } => None,
        }
    }

    pub fn aspect_kind(&self) -> Option<AspectKind> {
        match self {
            SchemaError::DuplicateAspect { kind, .. } => Some(*kind),
            SchemaError::DuplicateProperty { .. } => None,
        }
    }
}

/// Result type alias using SchemaError.
pub type SchemaResult<T> = Result<T, SchemaError>;
