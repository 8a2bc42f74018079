//! Command-line interface for the profile generator

use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use profilegen_core::error::{ProfileGenError, Result};
use profilegen_core::types::LATEST;

use crate::generator::ProfileGenerator;
use crate::source::{FileVocabularySource, HttpVocabularySource, VocabularySource};

/// Generate a Bioschemas.org profile template for a given schema.org type
#[derive(Parser, Debug)]
#[command(name = "profilegen", version, about, disable_version_flag = true)]
pub struct Cli {
    /// schema.org type, e.g. Dataset
    #[arg(value_name = "TYPE")]
    pub schema_type: String,

    /// bioschemas.org profile name, e.g. Dataset (by default same as TYPE)
    #[arg(value_name = "PROFILE")]
    pub profile: Option<String>,

    /// schema.org version to fetch, e.g. 10.0
    #[arg(
        short = 's',
        long = "schemaver",
        value_name = "VERSION",
        default_value = LATEST
    )]
    pub schema_version: String,

    /// Output format for the generated template
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Read vocabulary snapshots from a local release directory instead
    /// of the network
    #[arg(long, value_name = "DIR")]
    pub vocab_dir: Option<PathBuf>,

    /// Print version information and exit
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Flat text listing
    Text,
    /// Profile YAML template
    Yaml,
}

/// Run one generation and write the profile to stdout
///
/// # Errors
///
/// Returns the resolver or generator failure unchanged; the caller maps
/// it to a process exit status
pub async fn run(cli: Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Text => {}
        OutputFormat::Yaml => {
            return Err(ProfileGenError::not_implemented(
                "YAML template rendering",
            ));
        }
    }

    let source: Box<dyn VocabularySource> = match &cli.vocab_dir {
        Some(dir) => Box::new(FileVocabularySource::new(dir.clone())),
        None => Box::new(HttpVocabularySource::new()?),
    };

    let generator = ProfileGenerator::new(source);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    generator
        .generate(
            &cli.schema_type,
            cli.profile.as_deref(),
            &cli.schema_version,
            &mut out,
        )
        .await
}
