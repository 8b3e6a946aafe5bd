use crate::identity::{SchemaKind, TypeIdentity};
use crate::property::PropertyDescriptor;
use serde::{Deserialize, Serialize};

/// Serializable view of a built struct schema.
///
/// Producers emit properties sorted by name and aspects sorted by kind name,
/// so two snapshots of the same schema serialize identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructSchemaSnapshot {
    pub schema: String,

    #[serde(rename = "type")]
    pub type_identity: TypeIdentity,

    pub kind: SchemaKind,

    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aspects: Vec<AspectRef>,
}

impl StructSchemaSnapshot {
    pub fn new(type_identity: TypeIdentity) -> Self {
        Self {
            schema: crate::schema::MODELSCHEMA_STRUCT_V1.to_string(),
            type_identity,
            kind: SchemaKind::Struct,
            properties: vec![],
            aspects: vec![],
        }
    }
}

/// Reference to an aspect held by a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectRef {
    /// Kind name of the aspect (its type name unless the aspect overrides it).
    pub kind: String,

    /// Debug rendering of the aspect instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
