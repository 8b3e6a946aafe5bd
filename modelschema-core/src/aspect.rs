use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A capability extension attached to a struct schema ("is serializable",
/// "has a builder", ...).
///
/// The concrete type of an aspect is its kind. A schema holds at most one
/// instance of each aspect type.
pub trait SchemaAspect: Any + fmt::Debug + Send + Sync + 'static {
    /// Name used in diagnostics. Defaults to the concrete type name.
    fn aspect_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Discriminator of an aspect's variant: the concrete Rust type of the aspect.
///
/// Equality, hashing and ordering use the type id only; the name is carried
/// for diagnostics.
#[derive(Clone, Copy)]
pub struct AspectKind {
    id: TypeId,
    name: &'static str,
}

impl AspectKind {
    pub fn of<A: SchemaAspect>() -> Self {
        Self {
            id: TypeId::of::<A>(),
            name: std::any::type_name::<A>(),
        }
    }

    /// Kind of a type-erased aspect instance.
    pub fn of_instance(aspect: &dyn SchemaAspect) -> Self {
        Self {
            id: Any::type_id(as_any(aspect)),
            name: aspect.aspect_name(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn id(&self) -> TypeId {
        self.id
    }
}

impl PartialEq for AspectKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AspectKind {}

impl Hash for AspectKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for AspectKind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AspectKind {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Debug for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AspectKind").field(&self.name).finish()
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

fn as_any(aspect: &dyn SchemaAspect) -> &dyn Any {
    aspect
}

/// Checked downcast of a stored aspect to its concrete type.
pub(crate) fn downcast_ref<A: SchemaAspect>(aspect: &dyn SchemaAspect) -> Option<&A> {
    as_any(aspect).downcast_ref::<A>()
}
