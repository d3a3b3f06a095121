// Credential check and refresh flow
use crate::aws_cli::AwsCli;
use crate::config::EnvFile;
use crate::error::Result;
use crate::models::{AwsSettings, Outcome};
use std::path::Path;

/// Load settings from `env_path`, verify credentials and log in when they are missing or expired.
///
/// Configuration errors are returned before any aws command runs.
pub fn run(env_path: &Path, aws: &dyn AwsCli) -> Result<Outcome> {
    let env = EnvFile::load(env_path)?;
    let settings = AwsSettings::from_env_file(&env)?;

    println!(
        "Using profile {} and region {}",
        settings.profile, settings.region
    );
    println!("Checking AWS credentials...");

    if aws.check_identity(&settings) {
        println!("✓ Credentials are valid.");
        return Ok(Outcome::AlreadyValid);
    }

    println!("Credentials missing or expired. Running aws sso login ...");
    aws.sso_login(&settings)?;

    println!("✓ AWS tokens refreshed successfully");
    Ok(Outcome::Refreshed)
}

/// Process exit status for a finished run
pub fn exit_code(result: &Result<Outcome>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
