//! Declaration files: the raw properties and aspects of one type, written as
//! JSON or TOML, fed to the schema builder through [`DeclarationSource`].

use crate::catalog::DeclaredAspect;
use anyhow::Context;
use camino::Utf8Path;
use fs_err as fs;
use modelschema_core::{
    DeclarationSource, PropertyDescriptor, SchemaAspect, SchemaResult, StructSchema, TypeIdentity,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeclarationFile {
    #[serde(rename = "type")]
    pub type_identity: TypeIdentity,

    /// Property declarations in declaration order.
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,

    #[serde(default)]
    pub aspects: Vec<DeclaredAspect>,
}

impl DeclarationFile {
    pub fn build(&self) -> SchemaResult<StructSchema> {
        StructSchema::from_source(self)
    }
}

impl DeclarationSource for DeclarationFile {
    fn type_identity(&self) -> TypeIdentity {
        self.type_identity.clone()
    }

    fn property_declarations(&self) -> Vec<Arc<PropertyDescriptor>> {
        self.properties.iter().cloned().map(Arc::new).collect()
    }

    fn aspect_declarations(&self) -> Vec<Arc<dyn SchemaAspect>> {
        self.aspects.iter().map(DeclaredAspect::to_aspect).collect()
    }
}

/// Parse a declaration file. `.toml` files are read as TOML, anything else as JSON.
pub fn load_declarations(path: &Utf8Path) -> anyhow::Result<DeclarationFile> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path))?;
    let decl = if path.extension() == Some("toml") {
        parse_toml(&contents)
    } else {
        parse_json(&contents)
    }
    .with_context(|| format!("parse declarations from {}", path))?;

    debug!(
        "loaded {} property and {} aspect declarations for {} from {}",
        decl.properties.len(),
        decl.aspects.len(),
        decl.type_identity,
        path
    );
    Ok(decl)
}

pub fn parse_json(contents: &str) -> anyhow::Result<DeclarationFile> {
    serde_json::from_str(contents).context("invalid JSON")
}

pub fn parse_toml(contents: &str) -> anyhow::Result<DeclarationFile> {
    toml::from_str(contents).context("invalid TOML")
}
