// aws-sso-refresh - refresh AWS SSO credentials on demand

mod aws_cli;
mod cli;
mod config;
mod error;
mod models;
mod refresh;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = cli::Cli::parse();

    // Diagnostics go to stderr; user-facing messages are printed directly
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = cli::execute(args);
    match &result {
        Ok(outcome) => tracing::debug!("Finished: {}", outcome.as_str()),
        Err(e) => eprintln!("✗ {}", e),
    }

    ExitCode::from(refresh::exit_code(&result))
}
