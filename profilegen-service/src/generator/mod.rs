//! Profile template rendering
//!
//! Renders a resolution result as a flat text listing. No logic beyond
//! ordered emission: no filtering, no sorting, no deduplication — the
//! resolver owns all of that.

use std::io::Write;

use profilegen_core::error::Result;

use crate::resolver::VocabularyResolver;
use crate::source::VocabularySource;

/// Generates a Bioschemas profile template for one schema.org type
pub struct ProfileGenerator<S> {
    resolver: VocabularyResolver<S>,
}

impl<S: VocabularySource> ProfileGenerator<S> {
    /// Create a generator over a vocabulary source
    pub fn new(source: S) -> Self {
        Self {
            resolver: VocabularyResolver::new(source),
        }
    }

    /// Resolve the type and write the profile skeleton to `out`.
    ///
    /// `profile` defaults to the type name. Nothing is written until
    /// resolution has fully succeeded, so a failed run never emits a
    /// partial profile.
    ///
    /// # Errors
    ///
    /// Resolver failures propagate unchanged; writing to `out` can add an
    /// `Io` error
    pub async fn generate(
        &self,
        schema_type: &str,
        profile: Option<&str>,
        schema_version: &str,
        out: &mut dyn Write,
    ) -> Result<()> {
        let profile = profile.unwrap_or(schema_type);
        let result = self
            .resolver
            .find_properties(schema_type, profile, schema_version)
            .await?;

        writeln!(out, "Profile: {}", result.profile)?;
        writeln!(out, "Based on schema.org: {}", result.version)?;
        for entry in &result.entries {
            writeln!(out, "Type: {}", entry.name)?;
            writeln!(out, "Properties:")?;
            for property in &entry.properties {
                writeln!(out, "{property}")?;
            }
        }
        Ok(())
    }
}
