//! HTTP source reading the published schema.org release tree

use async_trait::async_trait;
use profilegen_core::config::SourceConfig;
use profilegen_core::error::{ProfileGenError, Result};
use url::Url;

use super::{VERSION_INDEX_FILE, VersionIndex, VocabularySource, document_path};

/// Fetches release snapshots over HTTP.
///
/// Reads `versions.json` for the version index and
/// `version/<ver>/schemaorg-all-https.jsonld` for the vocabulary itself,
/// both relative to the configured base URL. No retries: a transport
/// failure surfaces immediately as a fetch error.
#[derive(Debug)]
pub struct HttpVocabularySource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpVocabularySource {
    /// Create a source pointed at the public schema.org release tree
    ///
    /// # Errors
    ///
    /// Returns `ProfileGenError::Fetch` if the HTTP client cannot be built
    pub fn new() -> Result<Self> {
        Self::with_config(&SourceConfig::default())
    }

    /// Create a source with explicit settings
    ///
    /// # Errors
    ///
    /// Returns `ProfileGenError::Fetch` if the base URL is invalid or the
    /// HTTP client cannot be built
    pub fn with_config(config: &SourceConfig) -> Result<Self> {
        let mut base_url = Url::parse(&config.base_url)
            .map_err(|e| ProfileGenError::fetch(&config.base_url, e.to_string()))?;
        // Joining relative paths replaces the last segment unless the base
        // ends with a slash
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ProfileGenError::fetch(&config.base_url, e.to_string()))?;

        Ok(Self { client, base_url })
    }

    fn join(&self, relative: &str) -> Result<Url> {
        self.base_url
            .join(relative)
            .map_err(|e| ProfileGenError::fetch(relative, e.to_string()))
    }

    async fn get(&self, url: Url) -> Result<String> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ProfileGenError::fetch(url.as_str(), e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProfileGenError::fetch(
                url.as_str(),
                format!("HTTP status {status}"),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| ProfileGenError::fetch(url.as_str(), e.to_string()))
    }

    async fn version_index(&self) -> Result<VersionIndex> {
        let url = self.join(VERSION_INDEX_FILE)?;
        tracing::debug!(%url, "fetching release index");
        VersionIndex::parse(&self.get(url).await?)
    }
}

#[async_trait]
impl VocabularySource for HttpVocabularySource {
    async fn latest_version(&self) -> Result<String> {
        Ok(self.version_index().await?.schema_version)
    }

    async fn known_versions(&self) -> Result<Vec<String>> {
        Ok(self.version_index().await?.versions())
    }

    async fn fetch_document(&self, version: &str) -> Result<String> {
        let url = self.join(&document_path(version))?;
        tracing::debug!(%url, "fetching vocabulary document");
        self.get(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn source_for(base_url: &str) -> HttpVocabularySource {
        let config = SourceConfig {
            base_url: base_url.to_string(),
            ..SourceConfig::default()
        };
        HttpVocabularySource::with_config(&config).expect("source builds")
    }

    #[test]
    fn test_urls_resolve_under_default_base() {
        let source = source_for("https://schema.org");
        assert_eq!(
            source.join(VERSION_INDEX_FILE).expect("joins").as_str(),
            "https://schema.org/versions.json"
        );
        assert_eq!(
            source.join(&document_path("28.1")).expect("joins").as_str(),
            "https://schema.org/version/28.1/schemaorg-all-https.jsonld"
        );
    }

    #[test]
    fn test_base_path_without_trailing_slash_is_kept() {
        let source = source_for("http://127.0.0.1:9000/releases");
        assert_eq!(
            source.join(VERSION_INDEX_FILE).expect("joins").as_str(),
            "http://127.0.0.1:9000/releases/versions.json"
        );
    }

    #[test]
    fn test_invalid_base_url_is_a_fetch_error() {
        let config = SourceConfig {
            base_url: "not a url".to_string(),
            ..SourceConfig::default()
        };
        let err = HttpVocabularySource::with_config(&config).expect_err("must fail");
        assert!(matches!(err, ProfileGenError::Fetch { .. }));
    }
}
