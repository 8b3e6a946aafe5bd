use modelschema_core::{
    AccessorKind, DeclarationSource, PropertyDescriptor, SchemaAspect, SchemaError, StructSchema,
    TypeIdentity, ValueKind,
};
use std::sync::Arc;

#[derive(Debug)]
struct Managed;

impl SchemaAspect for Managed {}

/// In-memory stand-in for an accessor-scanning extractor.
struct FixtureSource {
    properties: Vec<PropertyDescriptor>,
    aspects: Vec<Arc<dyn SchemaAspect>>,
}

impl DeclarationSource for FixtureSource {
    fn type_identity(&self) -> TypeIdentity {
        TypeIdentity::new("fixture.Thing")
    }

    fn property_declarations(&self) -> Vec<Arc<PropertyDescriptor>> {
        self.properties.iter().cloned().map(Arc::new).collect()
    }

    fn aspect_declarations(&self) -> Vec<Arc<dyn SchemaAspect>> {
        self.aspects.clone()
    }
}

#[test]
fn builds_from_declaration_source() {
    let source = FixtureSource {
        properties: vec![
            PropertyDescriptor::new("name", ValueKind::String).writable(),
            PropertyDescriptor::boolean("active").with_accessor(AccessorKind::Is),
            PropertyDescriptor::boolean("active"),
        ],
        aspects: vec![Arc::new(Managed)],
    };

    let schema = StructSchema::from_source(&source).expect("build");

    assert_eq!(schema.type_identity().as_str(), "fixture.Thing");
    assert_eq!(schema.property_names().collect::<Vec<_>>(), vec!["active", "name"]);
    assert_eq!(
        schema.property("active").map(|p| p.accessor),
        Some(AccessorKind::Is)
    );
    assert!(schema.has_aspect::<Managed>());
}

#[test]
fn source_errors_name_the_source_type() {
    let source = FixtureSource {
        properties: vec![
            PropertyDescriptor::new("id", ValueKind::Long),
            PropertyDescriptor::new("id", ValueKind::Long),
        ],
        aspects: vec![],
    };

    let err = StructSchema::from_source(&source).expect_err("duplicate");
    assert!(matches!(err, SchemaError::DuplicateProperty { .. }));
    assert_eq!(err.type_identity().as_str(), "fixture.Thing");
}
