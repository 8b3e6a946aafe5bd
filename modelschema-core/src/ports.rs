use crate::aspect::SchemaAspect;
use modelschema_types::{PropertyDescriptor, TypeIdentity};
use std::sync::Arc;

/// Raw declarations for one structural type, as produced by an extraction
/// process that inspects the type's accessors.
///
/// modelschema-core consumes this port but ships no implementation; hosts
/// supply their own (reflection, declaration files, in-memory fixtures).
pub trait DeclarationSource {
    fn type_identity(&self) -> TypeIdentity;

    /// Property declarations in declaration order. Order matters: the first
    /// declaration of a repeated boolean property is the one retained.
    fn property_declarations(&self) -> Vec<Arc<PropertyDescriptor>>;

    fn aspect_declarations(&self) -> Vec<Arc<dyn SchemaAspect>>;
}
