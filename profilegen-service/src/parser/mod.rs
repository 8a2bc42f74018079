//! Parsing of schema.org release documents
//!
//! schema.org publishes each release as one JSON-LD document
//! (`schemaorg-all-*.jsonld`); [`JsonLdParser`] turns it into the
//! `Vocabulary` the resolver walks.

pub mod jsonld;

pub use jsonld::JsonLdParser;
