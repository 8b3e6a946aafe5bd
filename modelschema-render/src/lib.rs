//! Rendering helpers (markdown and plain text) for struct schema snapshots.

use modelschema_types::{PropertyDescriptor, StructSchemaSnapshot};

pub fn render_schema_md(snapshot: &StructSchemaSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "# {} schema `{}`\n\n",
        snapshot.kind, snapshot.type_identity
    ));
    out.push_str(&format!("- Properties: {}\n", snapshot.properties.len()));
    out.push_str(&format!("- Aspects: {}\n\n", snapshot.aspects.len()));

    out.push_str("## Properties\n\n");
    if snapshot.properties.is_empty() {
        out.push_str("_No properties._\n");
    } else {
        out.push_str("| Name | Kind | Accessor | Writable |\n");
        out.push_str("|------|------|----------|----------|\n");
        for p in &snapshot.properties {
            out.push_str(&format!(
                "| `{}` | `{}` | `{}` | {} |\n",
                p.name,
                p.value_kind,
                p.accessor.as_str(),
                writable_label(p)
            ));
        }
    }

    out.push_str("\n## Aspects\n\n");
    if snapshot.aspects.is_empty() {
        out.push_str("_No aspects._\n");
        return out;
    }

    for a in &snapshot.aspects {
        match &a.detail {
            Some(detail) => out.push_str(&format!("- `{}`: {}\n", a.kind, detail)),
            None => out.push_str(&format!("- `{}`\n", a.kind)),
        }
    }

    out
}

/// Column-aligned listing for terminals.
pub fn render_schema_text(snapshot: &StructSchemaSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", snapshot.kind, snapshot.type_identity));

    let name_width = snapshot
        .properties
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(0);
    let kind_width = snapshot
        .properties
        .iter()
        .map(|p| p.value_kind.type_name().len())
        .max()
        .unwrap_or(0);

    for p in &snapshot.properties {
        out.push_str(&format!(
            "  {:<nw$}  {:<kw$}  {:<3}  {}\n",
            p.name,
            p.value_kind.type_name(),
            p.accessor.as_str(),
            writable_label(p),
            nw = name_width,
            kw = kind_width,
        ));
    }

    if !snapshot.aspects.is_empty() {
        out.push_str("aspects:\n");
        for a in &snapshot.aspects {
            out.push_str(&format!("  {}\n", a.kind));
        }
    }

    out
}

fn writable_label(p: &PropertyDescriptor) -> &'static str {
    if p.writable { "writable" } else { "read-only" }
}
