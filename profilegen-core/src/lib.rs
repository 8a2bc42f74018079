//! # Profilegen Core
//!
//! Core types and error handling for Bioschemas profile generation.
//!
//! This crate provides the fundamental building blocks for resolving a
//! schema.org type's inherited property set: the parsed-vocabulary data
//! model, the resolution result types, the error kinds with their process
//! exit-status mapping, and the vocabulary source configuration.
//!
//! No I/O happens here; fetching, parsing and rendering live in
//! `profilegen-service`.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Error kinds for profile generation
pub mod error;

/// Vocabulary source configuration
pub mod config;

/// Type definitions for parsed vocabularies and resolution results
pub mod types;

// Re-export commonly used types
pub use config::SourceConfig;
pub use error::{ProfileGenError, Result};
pub use types::{PropertyRecord, ResolutionResult, ResolvedType, TypeNode, Vocabulary, LATEST};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::SourceConfig;
    pub use crate::error::{ProfileGenError, Result};
    pub use crate::types::*;
}
