//! Core type definitions for parsed schema.org vocabularies and
//! resolution results

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Version selector that always resolves to the newest published snapshot
pub const LATEST: &str = "latest";

/// One schema.org type within a specific vocabulary snapshot.
///
/// Names are case-sensitive identifiers and are stored exactly as they
/// appear in the vocabulary, never normalized. `parents` keeps the
/// declaration order from the source document; it is empty only for the
/// vocabulary root.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeNode {
    /// Type name, unique within one snapshot
    pub name: String,

    /// Direct parent type names in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<String>,

    /// Directly-declared property names in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<String>,
}

/// A parsed snapshot of the schema.org vocabulary.
///
/// Immutable once parsing completes; scoped to the lifetime of one
/// resolution call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vocabulary {
    /// The snapshot version this vocabulary was parsed from
    pub version: String,

    /// All types keyed by exact name, in declaration order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub types: IndexMap<String, TypeNode>,
}

impl Vocabulary {
    /// Create an empty vocabulary for a snapshot version
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            types: IndexMap::new(),
        }
    }

    /// Exact, case-sensitive type lookup
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&TypeNode> {
        self.types.get(name)
    }

    /// Insert a type, keyed by its name
    pub fn insert_type(&mut self, node: TypeNode) {
        self.types.insert(node.name.clone(), node);
    }

    /// Number of types in the snapshot
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the snapshot holds no types
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Properties declared directly on one type of an ancestor chain.
///
/// Inherited properties are never flattened in; each entry lists only
/// what the type declares itself, so callers can see where each property
/// originates. A type with no declared properties keeps its entry with an
/// empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedType {
    /// Type name as found in the vocabulary
    pub name: String,

    /// Directly-declared property names in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<String>,
}

/// Ordered outcome of one resolution call.
///
/// The first entry is always the requested type, followed by its
/// ancestors; every entry was found in the fetched vocabulary.
/// Constructed once per invocation and consumed once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolutionResult {
    /// Profile name the caller requested (defaults to the type name)
    pub profile: String,

    /// The version selector the resolution ran under, as requested
    pub version: String,

    /// One entry per ancestor-chain member, requested type first
    pub entries: Vec<ResolvedType>,
}

impl ResolutionResult {
    /// Name of the requested type (the first entry)
    #[must_use]
    pub fn requested_type(&self) -> Option<&str> {
        self.entries.first().map(|entry| entry.name.as_str())
    }

    /// Iterate every property together with the type that declares it
    pub fn property_records(&self) -> impl Iterator<Item = PropertyRecord<'_>> {
        self.entries.iter().flat_map(|entry| {
            entry.properties.iter().map(move |name| PropertyRecord {
                name,
                declared_by: &entry.name,
            })
        })
    }
}

/// A property name paired with the type that declares it.
///
/// Borrowed view over [`ResolutionResult`] data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyRecord<'a> {
    /// Property name
    pub name: &'a str,

    /// Type the property is declared on
    pub declared_by: &'a str,
}
