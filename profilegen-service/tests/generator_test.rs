//! Integration tests for profile template rendering

mod common;

use common::dataset_source;
use pretty_assertions::assert_eq;
use profilegen_core::error::ProfileGenError;
use profilegen_service::generator::ProfileGenerator;

async fn render(
    schema_type: &str,
    profile: Option<&str>,
    schema_version: &str,
) -> Result<String, ProfileGenError> {
    let generator = ProfileGenerator::new(dataset_source());
    let mut out = Vec::new();
    generator
        .generate(schema_type, profile, schema_version, &mut out)
        .await?;
    Ok(String::from_utf8(out).expect("output is UTF-8"))
}

#[tokio::test]
async fn renders_full_listing_in_resolver_order() {
    let output = render("Dataset", None, "latest").await.expect("renders");
    assert_eq!(
        output,
        "Profile: Dataset\n\
         Based on schema.org: latest\n\
         Type: Dataset\n\
         Properties:\n\
         distribution\n\
         measurementTechnique\n\
         Type: CreativeWork\n\
         Properties:\n\
         author\n\
         Type: Thing\n\
         Properties:\n\
         name\n"
    );
}

#[tokio::test]
async fn profile_defaults_to_the_type_name() {
    let output = render("Dataset", None, "latest").await.expect("renders");
    assert!(output.starts_with("Profile: Dataset\n"));
}

#[tokio::test]
async fn explicit_profile_name_is_used() {
    let output = render("Dataset", Some("DatasetMinimal"), "latest")
        .await
        .expect("renders");
    assert!(output.starts_with("Profile: DatasetMinimal\n"));
}

#[tokio::test]
async fn version_header_echoes_the_selector() {
    let output = render("Dataset", None, "28.1").await.expect("renders");
    assert!(output.contains("Based on schema.org: 28.1\n"));
}

#[tokio::test]
async fn zero_property_types_keep_their_block() {
    let output = render("Intangible", None, "latest").await.expect("renders");
    assert_eq!(
        output,
        "Profile: Intangible\n\
         Based on schema.org: latest\n\
         Type: Intangible\n\
         Properties:\n\
         Type: Thing\n\
         Properties:\n\
         name\n"
    );
}

#[tokio::test]
async fn failed_resolution_emits_nothing() {
    let generator = ProfileGenerator::new(dataset_source());
    let mut out = Vec::new();
    let err = generator
        .generate("Frobnicate", None, "latest", &mut out)
        .await
        .expect_err("must fail");

    assert!(matches!(err, ProfileGenError::TypeNotFound { .. }));
    assert!(out.is_empty(), "no partial profile may be written");
}
