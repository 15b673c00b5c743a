//! Primitive type names and the capability groups built from them.

use serde::Serialize;
use std::fmt;

/// Name of a primitive type as it appears in a `case` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TypeName(&'static str);

impl TypeName {
    /// Wrap a type name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The type name as written in source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// An ordered set of type names sharing a capability, such as
/// "supports negation".
///
/// Iteration order is the order the names were given in and is never sorted;
/// generated clauses follow it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityGroup {
    name: &'static str,
    types: Vec<TypeName>,
}

impl CapabilityGroup {
    /// Create a group from type names in the order given.
    #[must_use]
    pub fn new(name: &'static str, types: &[&'static str]) -> Self {
        Self {
            name,
            types: types.iter().copied().map(TypeName::new).collect(),
        }
    }

    /// Create a new group holding every type of `self` followed by `extra`.
    #[must_use]
    pub fn extend(&self, name: &'static str, extra: &[&'static str]) -> Self {
        let mut types = self.types.clone();
        types.extend(extra.iter().copied().map(TypeName::new));
        Self { name, types }
    }

    /// Name of the capability.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Member types, in order.
    #[must_use]
    pub fn types(&self) -> &[TypeName] {
        &self.types
    }

    /// Number of member types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Whether `name` is a member.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.iter().any(|t| t.as_str() == name)
    }
}
