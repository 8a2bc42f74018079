//! # Profilegen Service
//!
//! Bioschemas.org profile template generation for schema.org types.
//!
//! The pipeline: a [`source::VocabularySource`] serves versioned
//! schema.org release documents, the [`parser`] turns one document into a
//! `Vocabulary`, the [`resolver::VocabularyResolver`] walks the requested
//! type's ancestor chain and collects each type's directly-declared
//! properties, and the [`generator::ProfileGenerator`] renders the result
//! as a flat text listing. The `profilegen` binary wires these together
//! behind a clap CLI.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Command-line interface
pub mod cli;

/// Profile template rendering
pub mod generator;

/// Release document parsing
pub mod parser;

/// Ancestor-chain property resolution
pub mod resolver;

/// Vocabulary snapshot sources
pub mod source;

// Re-export the main entry points
pub use generator::ProfileGenerator;
pub use parser::JsonLdParser;
pub use resolver::VocabularyResolver;
pub use source::{FileVocabularySource, HttpVocabularySource, VocabularySource};
