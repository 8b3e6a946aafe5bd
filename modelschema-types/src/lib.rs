//! Shared descriptors (schemas-as-code) for the modelschema workspace.
//!
//! # Design constraints
//! - Descriptors are plain data; validation lives in `modelschema-core`.
//! - Snapshots are intended to be serialized for diagnostics and tooling.
//! - Prefer adding optional fields over changing semantics.

pub mod identity;
pub mod property;
pub mod snapshot;

pub use identity::{SchemaKind, TypeIdentity};
pub use property::{AccessorKind, PropertyDescriptor, ValueKind};
pub use snapshot::{AspectRef, StructSchemaSnapshot};

/// Schema identifiers.
pub mod schema {
    pub const MODELSCHEMA_STRUCT_V1: &str = "modelschema.struct.v1";
}
