//! Bioschemas profile generator command-line tool
//!
//! Resolves a schema.org type's ancestor chain and prints a profile
//! skeleton; failures map to POSIX-errno-aligned exit statuses.

use std::process::ExitCode;

use clap::Parser;
use profilegen_service::cli::{self, Cli};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
