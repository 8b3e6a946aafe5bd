//! Struct schemas: turn raw property and aspect declarations into an immutable,
//! deterministically ordered descriptor of a structural type.
//!
//! This crate owns *what* a schema contains and the rules that reconcile repeated
//! declarations. It does not own extraction of declarations from types (see
//! [`DeclarationSource`]) or caching schemas across a model space.

mod aspect;
mod builder;
mod error;
mod ports;
mod schema;

pub use aspect::{AspectKind, SchemaAspect};
pub use builder::StructSchemaBuilder;
pub use error::{SchemaError, SchemaResult};
pub use ports::DeclarationSource;
pub use schema::StructSchema;

pub use modelschema_types::{
    AccessorKind, PropertyDescriptor, SchemaKind, StructSchemaSnapshot, TypeIdentity, ValueKind,
};
