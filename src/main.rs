//! Assignment archive CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use assignment_archive::{
    ArchiveConfig, HttpCommitGateway, PullRequestCommitResolver, ResolveError, ResolvedCommit,
};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

async fn run() -> Result<(), ResolveError> {
    let config = load_config()?;

    let pr_url = config.require_pr_url()?;
    let cutoff = config.require_cutoff()?;
    let zone = config.cutoff_zone()?;

    let gateway = HttpCommitGateway::new(&config.github_settings())?;
    let resolver = PullRequestCommitResolver::new(&gateway).with_zone(zone);
    let commit = resolver.resolve_last_commit_before(pr_url, cutoff).await?;

    write_commit(&commit)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ResolveError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ArchiveConfig, ResolveError> {
    ArchiveConfig::load().map_err(|error| ResolveError::Configuration {
        message: error.to_string(),
    })
}

fn write_commit(commit: &ResolvedCommit) -> Result<(), ResolveError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", commit.hash).map_err(|error| ResolveError::Io {
        message: error.to_string(),
    })
}
