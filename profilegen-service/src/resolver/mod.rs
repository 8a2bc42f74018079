//! Ancestor-chain property resolution
//!
//! The one piece of real logic in the system: resolve a version selector
//! against the source's known set, fetch and parse that snapshot, locate
//! the requested type, and walk its ancestor chain collecting each
//! type's directly-declared properties.

use std::collections::HashSet;

use profilegen_core::error::{ProfileGenError, Result};
use profilegen_core::types::{LATEST, ResolutionResult, ResolvedType, Vocabulary};

use crate::parser::JsonLdParser;
use crate::source::VocabularySource;

/// Resolves a schema.org type's ancestor chain and per-type properties.
///
/// A pure function of its inputs and the source's current content; no
/// state survives between calls.
pub struct VocabularyResolver<S> {
    source: S,
    parser: JsonLdParser,
}

impl<S: VocabularySource> VocabularyResolver<S> {
    /// Create a resolver over a vocabulary source
    pub fn new(source: S) -> Self {
        Self {
            source,
            parser: JsonLdParser::new(),
        }
    }

    /// Resolve `schema_type` against one vocabulary snapshot.
    ///
    /// Returns one entry per ancestor-chain member, the requested type
    /// first, each listing only the properties declared directly on that
    /// type. The chain visits every reachable ancestor exactly once,
    /// pre-order, following parents in declaration order.
    ///
    /// # Errors
    ///
    /// - `InvalidType` if `schema_type` is empty
    /// - `VersionNotFound` if `schema_version` is neither `latest` nor a
    ///   published version; no document is fetched in that case
    /// - `Fetch`/`Parse`/`Io` if the snapshot cannot be retrieved or read
    /// - `TypeNotFound` if the type, or any ancestor it names, is absent
    ///   from the snapshot
    pub async fn find_properties(
        &self,
        schema_type: &str,
        profile: &str,
        schema_version: &str,
    ) -> Result<ResolutionResult> {
        if schema_type.is_empty() {
            return Err(ProfileGenError::invalid_type(schema_type));
        }

        let version = self.resolve_version(schema_version).await?;
        tracing::debug!(selector = %schema_version, %version, "resolved version");

        let document = self.source.fetch_document(&version).await?;
        let vocabulary = self.parser.parse_str(&document, &version)?;
        tracing::debug!(types = vocabulary.len(), "parsed vocabulary snapshot");

        let entries = collect_chain(&vocabulary, schema_type)?;
        Ok(ResolutionResult {
            profile: profile.to_string(),
            version: schema_version.to_string(),
            entries,
        })
    }

    /// Map the selector to a concrete published version, before anything
    /// is fetched
    async fn resolve_version(&self, selector: &str) -> Result<String> {
        if selector == LATEST {
            return self.source.latest_version().await;
        }
        let known = self.source.known_versions().await?;
        if known.iter().any(|version| version == selector) {
            Ok(selector.to_string())
        } else {
            Err(ProfileGenError::version_not_found(selector))
        }
    }
}

/// Walk the ancestor chain from `schema_type` upward, each type exactly
/// once even when reachable through multiple inheritance paths
fn collect_chain(vocabulary: &Vocabulary, schema_type: &str) -> Result<Vec<ResolvedType>> {
    let mut entries = Vec::new();
    let mut visited = HashSet::new();
    visit(vocabulary, schema_type, &mut visited, &mut entries)?;
    Ok(entries)
}

fn visit(
    vocabulary: &Vocabulary,
    name: &str,
    visited: &mut HashSet<String>,
    entries: &mut Vec<ResolvedType>,
) -> Result<()> {
    if !visited.insert(name.to_string()) {
        return Ok(());
    }

    // An ancestor missing from the snapshot is a hard error: the chain
    // must be fully known for the profile to be correct
    let node = vocabulary
        .get_type(name)
        .ok_or_else(|| ProfileGenError::type_not_found(name, &vocabulary.version))?;

    entries.push(ResolvedType {
        name: node.name.clone(),
        properties: node.properties.clone(),
    });

    for parent in &node.parents {
        visit(vocabulary, parent, visited, entries)?;
    }
    Ok(())
}
