use crate::aspect::{AspectKind, SchemaAspect};
use crate::error::{SchemaError, SchemaResult};
use crate::schema::StructSchema;
use modelschema_types::{PropertyDescriptor, TypeIdentity};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;
use tracing::debug;

/// Collects raw declarations for one structural type and turns them into a
/// [`StructSchema`].
///
/// Declarations are only validated in [`build`](Self::build), which consumes
/// the builder; a schema value exists only once both tables are complete.
#[derive(Debug)]
pub struct StructSchemaBuilder {
    type_identity: TypeIdentity,
    properties: Vec<Arc<PropertyDescriptor>>,
    aspects: Vec<Arc<dyn SchemaAspect>>,
}

impl StructSchemaBuilder {
    pub fn new(type_identity: impl Into<TypeIdentity>) -> Self {
        Self {
            type_identity: type_identity.into(),
            properties: Vec::new(),
            aspects: Vec::new(),
        }
    }

    /// Appends a property declaration. Declaration order decides which
    /// descriptor survives for a repeated boolean property.
    pub fn property(mut self, property: impl Into<Arc<PropertyDescriptor>>) -> Self {
        self.properties.push(property.into());
        self
    }

    pub fn properties<I>(mut self, properties: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arc<PropertyDescriptor>>,
    {
        self.properties.extend(properties.into_iter().map(Into::into));
        self
    }

    pub fn aspect<A: SchemaAspect>(mut self, aspect: A) -> Self {
        self.aspects.push(Arc::new(aspect));
        self
    }

    /// Appends an aspect instance that is shared with other consumers.
    pub fn shared_aspect(mut self, aspect: Arc<dyn SchemaAspect>) -> Self {
        self.aspects.push(aspect);
        self
    }

    pub fn aspects<I>(mut self, aspects: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn SchemaAspect>>,
    {
        self.aspects.extend(aspects);
        self
    }

    /// Validates, deduplicates and indexes the declarations.
    ///
    /// Properties are checked before aspects; the first violation is returned.
    pub fn build(self) -> SchemaResult<StructSchema> {
        let properties = index_properties(&self.type_identity, self.properties)?;
        let aspects = index_aspects(&self.type_identity, self.aspects)?;

        debug!(
            type_identity = %self.type_identity,
            properties = properties.len(),
            aspects = aspects.len(),
            "built struct schema"
        );

        Ok(StructSchema::from_parts(self.type_identity, properties, aspects))
    }
}

fn index_properties(
    type_identity: &TypeIdentity,
    declarations: Vec<Arc<PropertyDescriptor>>,
) -> SchemaResult<BTreeMap<String, Arc<PropertyDescriptor>>> {
    let mut table: BTreeMap<String, Arc<PropertyDescriptor>> = BTreeMap::new();
    for declaration in declarations {
        match table.entry(declaration.name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(declaration);
            }
            // Only the stored descriptor's kind is consulted; the later
            // declaration is dropped without being examined.
            Entry::Occupied(existing) if existing.get().is_boolean() => {
                debug!(
                    type_identity = %type_identity,
                    property = %declaration.name,
                    kept = existing.get().accessor.as_str(),
                    discarded = declaration.accessor.as_str(),
                    "discarding repeated boolean property declaration"
                );
            }
            Entry::Occupied(_) => {
                return Err(SchemaError::DuplicateProperty {
                    type_identity: type_identity.clone(),
                    name: declaration.name.clone(),
                });
            }
        }
    }
    Ok(table)
}

fn index_aspects(
    type_identity: &TypeIdentity,
    declarations: Vec<Arc<dyn SchemaAspect>>,
) -> SchemaResult<BTreeMap<AspectKind, Arc<dyn SchemaAspect>>> {
    let mut table: BTreeMap<AspectKind, Arc<dyn SchemaAspect>> = BTreeMap::new();
    for aspect in declarations {
        let kind = AspectKind::of_instance(aspect.as_ref());
        match table.entry(kind) {
            Entry::Vacant(slot) => {
                slot.insert(aspect);
            }
            Entry::Occupied(_) => {
                return Err(SchemaError::DuplicateAspect {
                    type_identity: type_identity.clone(),
                    kind,
                });
            }
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::StructSchemaBuilder;
    use crate::aspect::SchemaAspect;
    use crate::error::SchemaError;
    use modelschema_types::{AccessorKind, PropertyDescriptor, ValueKind};
    use std::sync::Arc;

    #[derive(Debug)]
    struct Serializable;

    impl SchemaAspect for Serializable {}

    #[test]
    fn empty_builder_produces_empty_schema() {
        let schema = StructSchemaBuilder::new("Empty").build().expect("build");
        assert_eq!(schema.property_count(), 0);
        assert_eq!(schema.aspect_count(), 0);
        assert_eq!(schema.type_identity().as_str(), "Empty");
    }

    #[test]
    fn repeated_boolean_keeps_first_declaration() {
        let schema = StructSchemaBuilder::new("Toggle")
            .property(PropertyDescriptor::boolean("enabled"))
            .property(PropertyDescriptor::boolean("enabled").with_accessor(AccessorKind::Is))
            .build()
            .expect("build");

        assert_eq!(schema.property_count(), 1);
        let kept = schema.property("enabled").expect("enabled");
        assert_eq!(kept.accessor, AccessorKind::Get);
    }

    #[test]
    fn properties_are_checked_before_aspects() {
        let err = StructSchemaBuilder::new("Broken")
            .property(PropertyDescriptor::new("value", ValueKind::String))
            .property(PropertyDescriptor::new("value", ValueKind::Integer))
            .aspect(Serializable)
            .aspect(Serializable)
            .build()
            .expect_err("duplicate");

        assert!(matches!(err, SchemaError::DuplicateProperty { .. }));
    }

    #[test]
    fn shared_aspect_keeps_the_same_allocation() {
        let shared: Arc<dyn SchemaAspect> = Arc::new(Serializable);
        let schema = StructSchemaBuilder::new("Shared")
            .shared_aspect(Arc::clone(&shared))
            .build()
            .expect("build");

        let held = schema.aspect::<Serializable>().expect("aspect");
        let held_ptr = held as *const Serializable as *const ();
        let shared_ptr = Arc::as_ptr(&shared) as *const ();
        assert_eq!(held_ptr, shared_ptr);
    }
}
