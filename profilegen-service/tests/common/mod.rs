//! Shared in-memory vocabulary source for integration tests

// Each test crate compiles this module separately and uses a subset of it
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use indexmap::IndexMap;
use profilegen_core::error::{ProfileGenError, Result};
use profilegen_service::source::VocabularySource;

/// The release document the on-disk CLI fixture also uses:
/// Dataset -> CreativeWork -> Thing, plus the Series diamond through
/// CreativeWork and Intangible
pub fn dataset_document() -> &'static str {
    include_str!("../fixtures/vocab/version/28.1/schemaorg-all-https.jsonld")
}

/// In-memory source holding one document per version, counting fetches
/// so tests can assert when no document was retrieved
pub struct FixtureSource {
    latest: String,
    documents: IndexMap<String, String>,
    fetches: AtomicUsize,
}

impl FixtureSource {
    pub fn new(latest: &str) -> Self {
        Self {
            latest: latest.to_string(),
            documents: IndexMap::new(),
            fetches: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn with_document(mut self, version: &str, document: &str) -> Self {
        self.documents
            .insert(version.to_string(), document.to_string());
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VocabularySource for FixtureSource {
    async fn latest_version(&self) -> Result<String> {
        Ok(self.latest.clone())
    }

    async fn known_versions(&self) -> Result<Vec<String>> {
        Ok(self.documents.keys().cloned().collect())
    }

    async fn fetch_document(&self, version: &str) -> Result<String> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.documents
            .get(version)
            .cloned()
            .ok_or_else(|| ProfileGenError::version_not_found(version))
    }
}

/// Fixture source preloaded with the dataset document as version 28.1
pub fn dataset_source() -> FixtureSource {
    FixtureSource::new("28.1").with_document("28.1", dataset_document())
}
