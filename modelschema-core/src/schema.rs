use crate::aspect::{self, AspectKind, SchemaAspect};
use crate::builder::StructSchemaBuilder;
use crate::error::SchemaResult;
use crate::ports::DeclarationSource;
use modelschema_types::{AspectRef, PropertyDescriptor, SchemaKind, StructSchemaSnapshot, TypeIdentity};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Immutable descriptor of one structural type: its properties and aspects.
///
/// Built once through [`StructSchemaBuilder`]; nothing can insert, remove or
/// replace entries afterwards, so a schema can be shared behind an `Arc` and
/// read from any number of threads without locking.
#[derive(Debug, Clone)]
pub struct StructSchema {
    type_identity: TypeIdentity,
    properties: BTreeMap<String, Arc<PropertyDescriptor>>,
    aspects: BTreeMap<AspectKind, Arc<dyn SchemaAspect>>,
}

impl StructSchema {
    pub fn builder(type_identity: impl Into<TypeIdentity>) -> StructSchemaBuilder {
        StructSchemaBuilder::new(type_identity)
    }

    /// Builds a schema from ordered property declarations and aspect instances.
    pub fn build<P, A>(
        type_identity: impl Into<TypeIdentity>,
        properties: P,
        aspects: A,
    ) -> SchemaResult<Self>
    where
        P: IntoIterator,
        P::Item: Into<Arc<PropertyDescriptor>>,
        A: IntoIterator<Item = Arc<dyn SchemaAspect>>,
    {
        StructSchemaBuilder::new(type_identity)
            .properties(properties)
            .aspects(aspects)
            .build()
    }

    /// Builds a schema from everything an extraction source declares.
    pub fn from_source(source: &dyn DeclarationSource) -> SchemaResult<Self> {
        StructSchemaBuilder::new(source.type_identity())
            .properties(source.property_declarations())
            .aspects(source.aspect_declarations())
            .build()
    }

    pub(crate) fn from_parts(
        type_identity: TypeIdentity,
        properties: BTreeMap<String, Arc<PropertyDescriptor>>,
        aspects: BTreeMap<AspectKind, Arc<dyn SchemaAspect>>,
    ) -> Self {
        Self {
            type_identity,
            properties,
            aspects,
        }
    }

    pub fn type_identity(&self) -> &TypeIdentity {
        &self.type_identity
    }

    pub fn kind(&self) -> SchemaKind {
        SchemaKind::Struct
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// The retained descriptor for `name`, or `None` if no such property exists.
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.get(name).map(|p| p.as_ref())
    }

    /// All properties, ascending by name.
    pub fn properties(&self) -> impl ExactSizeIterator<Item = &PropertyDescriptor> + '_ {
        self.properties.values().map(|p| p.as_ref())
    }

    pub fn property_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.properties.keys().map(String::as_str)
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    pub fn has_aspect<A: SchemaAspect>(&self) -> bool {
        self.has_aspect_kind(AspectKind::of::<A>())
    }

    pub fn has_aspect_kind(&self, kind: AspectKind) -> bool {
        self.aspects.contains_key(&kind)
    }

    /// The aspect of type `A`, if the schema holds one.
    pub fn aspect<A: SchemaAspect>(&self) -> Option<&A> {
        let stored = self.aspects.get(&AspectKind::of::<A>())?;
        // Keys are derived from the stored value's concrete type, so a hit
        // always downcasts.
        aspect::downcast_ref::<A>(stored.as_ref())
    }

    pub fn aspect_by_kind(&self, kind: AspectKind) -> Option<&dyn SchemaAspect> {
        self.aspects.get(&kind).map(|a| a.as_ref())
    }

    /// All held aspects, one per kind. Callers must not depend on the order.
    pub fn aspects(&self) -> impl ExactSizeIterator<Item = &dyn SchemaAspect> + '_ {
        self.aspects.values().map(|a| a.as_ref())
    }

    pub fn aspect_kinds(&self) -> impl ExactSizeIterator<Item = AspectKind> + '_ {
        self.aspects.keys().copied()
    }

    pub fn aspect_count(&self) -> usize {
        self.aspects.len()
    }

    /// Serializable view for diagnostics; aspects are sorted by kind name.
    pub fn snapshot(&self) -> StructSchemaSnapshot {
        let mut snapshot = StructSchemaSnapshot::new(self.type_identity.clone());
        snapshot.properties = self.properties().cloned().collect();

        let mut aspects: Vec<AspectRef> = self
            .aspects
            .iter()
            .map(|(kind, aspect)| AspectRef {
                kind: kind.name().to_string(),
                detail: Some(format!("{:?}", aspect)),
            })
            .collect();
        aspects.sort_by(|a, b| a.kind.cmp(&b.kind));
        snapshot.aspects = aspects;

        snapshot
    }
}

impl fmt::Display for StructSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} schema for {}", self.kind(), self.type_identity)
    }
}

#[cfg(test)]
mod tests {
    use super::StructSchema;
    use crate::aspect::{AspectKind, SchemaAspect};
    use modelschema_types::{PropertyDescriptor, SchemaKind, ValueKind};
    use std::sync::Arc;

    #[derive(Debug, PartialEq)]
    struct Serializable {
        format: String,
    }

    impl SchemaAspect for Serializable {}

    #[derive(Debug)]
    struct Buildable;

    impl SchemaAspect for Buildable {}

    fn person() -> StructSchema {
        StructSchema::builder("Person")
            .property(PropertyDescriptor::new("name", ValueKind::String))
            .property(PropertyDescriptor::new("age", ValueKind::Integer))
            .aspect(Serializable {
                format: "json".to_string(),
            })
            .build()
            .expect("build person")
    }

    #[test]
    fn display_names_kind_and_type() {
        assert_eq!(person().to_string(), "struct schema for Person");
        assert_eq!(person().kind(), SchemaKind::Struct);
    }

    #[test]
    fn absent_lookups_are_none() {
        let schema = person();
        assert!(schema.property("missing").is_none());
        assert!(!schema.has_property("missing"));
        assert!(schema.aspect::<Buildable>().is_none());
        assert!(!schema.has_aspect::<Buildable>());
        assert!(schema.aspect_by_kind(AspectKind::of::<Buildable>()).is_none());
    }

    #[test]
    fn property_names_follow_property_order() {
        let schema = person();
        let names: Vec<&str> = schema.property_names().collect();
        assert_eq!(names, vec!["age", "name"]);
    }

    #[test]
    fn aspect_by_kind_returns_erased_instance() {
        let schema = person();
        let erased = schema
            .aspect_by_kind(AspectKind::of::<Serializable>())
            .expect("serializable");
        assert!(format!("{:?}", erased).contains("json"));
        assert_eq!(
            schema.aspect_kinds().collect::<Vec<_>>(),
            vec![AspectKind::of::<Serializable>()]
        );
    }

    #[test]
    fn build_accepts_erased_aspects() {
        let aspects: Vec<Arc<dyn SchemaAspect>> = vec![Arc::new(Buildable)];
        let schema = StructSchema::build(
            "Widget",
            vec![PropertyDescriptor::boolean("visible")],
            aspects,
        )
        .expect("build");

        assert!(schema.has_aspect::<Buildable>());
        assert!(schema.has_property("visible"));
    }

    #[test]
    fn snapshot_carries_sorted_properties() {
        let snapshot = person().snapshot();
        let names: Vec<&str> = snapshot.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["age", "name"]);
        assert_eq!(snapshot.aspects.len(), 1);
        assert!(snapshot.aspects[0].kind.ends_with("Serializable"));
    }
}
