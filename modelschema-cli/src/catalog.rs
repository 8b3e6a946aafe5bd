//! Aspects a declaration file can attach to a schema.
//!
//! Each declarable aspect is its own Rust type, so declaring the same aspect
//! twice in one file is rejected by the schema builder like any other
//! duplicate aspect kind.

use modelschema_core::SchemaAspect;
use serde::Deserialize;
use std::sync::Arc;

/// The type can be serialized in the named format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializableAspect {
    pub format: String,
}

impl SchemaAspect for SerializableAspect {
    fn aspect_name(&self) -> &'static str {
        "serializable"
    }
}

/// The type has a generated builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderAspect {
    pub builder_type: String,
}

impl SchemaAspect for BuilderAspect {
    fn aspect_name(&self) -> &'static str {
        "builder"
    }
}

/// Properties whose state is managed outside the generated view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmanagedPropertiesAspect {
    pub names: Vec<String>,
}

impl SchemaAspect for UnmanagedPropertiesAspect {
    fn aspect_name(&self) -> &'static str {
        "unmanaged_properties"
    }
}

/// An aspect entry as written in a declaration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "aspect", rename_all = "snake_case")]
pub enum DeclaredAspect {
    Serializable {
        #[serde(default = "default_serial_format")]
        format: String,
    },
    Builder {
        builder_type: String,
    },
    UnmanagedProperties {
        #[serde(default)]
        names: Vec<String>,
    },
}

fn default_serial_format() -> String {
    "json".to_string()
}

impl DeclaredAspect {
    pub fn key(&self) -> &'static str {
        match self {
            DeclaredAspect::Serializable { .. } => "serializable",
            DeclaredAspect::Builder { .. } => "builder",
            DeclaredAspect::UnmanagedProperties { .. } => "unmanaged_properties",
        }
    }

    pub fn to_aspect(&self) -> Arc<dyn SchemaAspect> {
        match self {
            DeclaredAspect::Serializable { format } => Arc::new(SerializableAspect {
                format: format.clone(),
            }),
            DeclaredAspect::Builder { builder_type } => Arc::new(BuilderAspect {
                builder_type: builder_type.clone(),
            }),
            DeclaredAspect::UnmanagedProperties { names } => Arc::new(UnmanagedPropertiesAspect {
                names: names.clone(),
            }),
        }
    }
}

/// Description of a declarable aspect for `modelschema list-aspects`.
#[derive(Debug, Clone)]
pub struct AspectInfo {
    /// Value of the `aspect` tag in declaration files.
    pub key: &'static str,
    pub title: &'static str,
    /// Extra fields accepted next to the tag.
    pub fields: &'static [&'static str],
    pub description: &'static str,
}

/// Registry of all declarable aspects.
pub static ASPECT_REGISTRY: &[AspectInfo] = &[
    AspectInfo {
        key: "builder",
        title: "Generated builder",
        fields: &["builder_type"],
        description: "The type is constructed through a generated builder named by `builder_type`.",
    },
    AspectInfo {
        key: "serializable",
        title: "Serializable",
        fields: &["format"],
        description: "The type can be serialized; `format` defaults to \"json\".",
    },
    AspectInfo {
        key: "unmanaged_properties",
        title: "Unmanaged properties",
        fields: &["names"],
        description: "The listed properties keep their state outside the generated view.",
    },
];

/// Look up a declarable aspect by key.
pub fn lookup_aspect(key: &str) -> Option<&'static AspectInfo> {
    ASPECT_REGISTRY.iter().find(|a| a.key == key)
}
