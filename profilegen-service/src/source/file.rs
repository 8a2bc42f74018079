//! Local-directory source over an offline release snapshot

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use profilegen_core::error::{ProfileGenError, Result};
use tokio::fs;

use super::{VERSION_INDEX_FILE, VersionIndex, VocabularySource, document_path};

/// Serves vocabulary snapshots from a directory mirroring the published
/// release tree: `versions.json` at the root plus
/// `version/<ver>/schemaorg-all-https.jsonld` per release.
pub struct FileVocabularySource {
    root: PathBuf,
}

impl FileVocabularySource {
    /// Create a source rooted at a snapshot directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn read(&self, relative: &str) -> Result<String> {
        let path = self.root.join(relative);
        tracing::debug!(path = %path.display(), "reading vocabulary file");
        fs::read_to_string(&path)
            .await
            .map_err(|e| classify_io(e, &path))
    }

    async fn version_index(&self) -> Result<VersionIndex> {
        VersionIndex::parse(&self.read(VERSION_INDEX_FILE).await?)
    }
}

/// Keep filesystem failure kinds distinguishable at the process boundary
fn classify_io(err: io::Error, path: &Path) -> ProfileGenError {
    match err.kind() {
        io::ErrorKind::NotADirectory => {
            ProfileGenError::not_a_directory(path.display().to_string())
        }
        io::ErrorKind::PermissionDenied => {
            ProfileGenError::permission_denied(path.display().to_string())
        }
        _ => ProfileGenError::Io(err),
    }
}

#[async_trait]
impl VocabularySource for FileVocabularySource {
    async fn latest_version(&self) -> Result<String> {
        Ok(self.version_index().await?.schema_version)
    }

    async fn known_versions(&self) -> Result<Vec<String>> {
        Ok(self.version_index().await?.versions())
    }

    async fn fetch_document(&self, version: &str) -> Result<String> {
        self.read(&document_path(version)).await
    }
}
