// CLI interface
use crate::aws_cli::SystemAwsCli;
use crate::config;
use crate::models::Outcome;
use crate::refresh;
use clap::Parser;

/// Takes no options; settings come from the .env file next to the executable
#[derive(Parser, Debug)]
#[command(name = "aws-sso-refresh")]
#[command(
    about = "Check cached AWS credentials and run aws sso login when they are missing or expired"
)]
#[command(
    long_about = "Reads AWS_PROFILE and AWS_REGION from the .env file located next to the \
                  executable, verifies credentials with `aws sts get-caller-identity` and \
                  runs `aws sso login --profile <AWS_PROFILE>` if the check fails."
)]
#[command(version)]
pub struct Cli {}

pub fn execute(_args: Cli) -> crate::error::Result<Outcome> {
    let env_path = config::default_env_file_path()?;
    let aws = SystemAwsCli::new();

    refresh::run(&env_path, &aws)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_rejects_arguments() {
        assert!(Cli::try_parse_from(["aws-sso-refresh"]).is_ok());
        assert!(Cli::try_parse_from(["aws-sso-refresh", "--profile", "dev"]).is_err());
        assert!(Cli::try_parse_from(["aws-sso-refresh", "extra"]).is_err());
    }
}
