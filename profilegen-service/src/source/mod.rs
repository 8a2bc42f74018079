//! Vocabulary sources for schema.org release snapshots
//!
//! A source exposes exactly what resolution needs from the outside world:
//! which snapshot `latest` currently names, which snapshots exist, and
//! the serialized vocabulary document for one of them. The published
//! release tree layout (`versions.json` index plus one JSON-LD document
//! per release) is shared by the HTTP source and the local-directory
//! source.

use async_trait::async_trait;
use indexmap::IndexMap;
use profilegen_core::error::Result;
use serde::Deserialize;

pub mod file;
pub mod http;

pub use file::FileVocabularySource;
pub use http::HttpVocabularySource;

/// Relative location of the release index
pub(crate) const VERSION_INDEX_FILE: &str = "versions.json";

/// Relative location of one release's vocabulary document
pub(crate) fn document_path(version: &str) -> String {
    format!("version/{version}/schemaorg-all-https.jsonld")
}

/// Access to published schema.org vocabulary snapshots
#[async_trait]
pub trait VocabularySource: Send + Sync {
    /// Version the `latest` selector resolves to right now
    async fn latest_version(&self) -> Result<String>;

    /// Every snapshot version the source can serve
    async fn known_versions(&self) -> Result<Vec<String>>;

    /// Serialized vocabulary document for one snapshot
    async fn fetch_document(&self, version: &str) -> Result<String>;
}

#[async_trait]
impl VocabularySource for Box<dyn VocabularySource> {
    async fn latest_version(&self) -> Result<String> {
        self.as_ref().latest_version().await
    }

    async fn known_versions(&self) -> Result<Vec<String>> {
        self.as_ref().known_versions().await
    }

    async fn fetch_document(&self, version: &str) -> Result<String> {
        self.as_ref().fetch_document(version).await
    }
}

#[async_trait]
impl<S: VocabularySource + ?Sized> VocabularySource for std::sync::Arc<S> {
    async fn latest_version(&self) -> Result<String> {
        self.as_ref().latest_version().await
    }

    async fn known_versions(&self) -> Result<Vec<String>> {
        self.as_ref().known_versions().await
    }

    async fn fetch_document(&self, version: &str) -> Result<String> {
        self.as_ref().fetch_document(version).await
    }
}

/// Shape of the published `versions.json` release index
#[derive(Debug, Clone, Deserialize)]
pub struct VersionIndex {
    /// Version the `latest` selector resolves to
    #[serde(rename = "schemaversion")]
    pub schema_version: String,

    /// Release date keyed by published version
    #[serde(default, rename = "releaseLog")]
    pub release_log: IndexMap<String, String>,
}

impl VersionIndex {
    /// Parse the index document
    ///
    /// # Errors
    ///
    /// Returns `ProfileGenError::Parse` if the document is not a valid
    /// release index
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Whether a version is published
    #[must_use]
    pub fn contains(&self, version: &str) -> bool {
        self.schema_version == version || self.release_log.contains_key(version)
    }

    /// All published versions, release-log order
    #[must_use]
    pub fn versions(&self) -> Vec<String> {
        let mut versions: Vec<String> = self.release_log.keys().cloned().collect();
        if !self.release_log.contains_key(&self.schema_version) {
            versions.push(self.schema_version.clone());
        }
        versions
    }
}
