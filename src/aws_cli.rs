// aws CLI invocation
use crate::error::{RefreshError, Result};
use crate::models::{AwsSettings, AWS_PROFILE, AWS_REGION};
use std::process::{Command, Stdio};

/// Default executable, resolved through PATH
pub const AWS_PROGRAM: &str = "aws";

/// Operations the refresh flow needs from the aws CLI
#[cfg_attr(test, mockall::automock)]
pub trait AwsCli {
    /// Run `aws sts get-caller-identity` with all output discarded.
    /// Returns true only when the command exits with status 0.
    fn check_identity(&self, settings: &AwsSettings) -> bool;

    /// Run `aws sso login --profile <profile>` attached to the terminal
    fn sso_login(&self, settings: &AwsSettings) -> Result<()>;
}

/// Runs the real aws executable without a shell
pub struct SystemAwsCli {
    program: String,
}

impl SystemAwsCli {
    pub fn new() -> Self {
        Self::with_program(AWS_PROGRAM)
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, settings: &AwsSettings) -> Command {
        let mut command = Command::new(&self.program);
        command
            .env(AWS_PROFILE, &settings.profile)
            .env(AWS_REGION, &settings.region);
        command
    }
}

impl Default for SystemAwsCli {
    fn default() -> Self {
        Self::new()
    }
}

impl AwsCli for SystemAwsCli {
    fn check_identity(&self, settings: &AwsSettings) -> bool {
        tracing::debug!("Running: {} sts get-caller-identity", self.program);

        let status = self
            .command(settings)
            .args(["sts", "get-caller-identity"])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) => {
                tracing::debug!("get-caller-identity exited with {:?}", status.code());
                status.success()
            }
            Err(e) => {
                tracing::warn!("Failed to run {}: {}", self.program, e);
                false
            }
        }
    }

    fn sso_login(&self, settings: &AwsSettings) -> Result<()> {
        tracing::debug!(
            "Running: {} sso login --profile {}",
            self.program,
            settings.profile
        );

        let status = self
            .command(settings)
            .args(["sso", "login", "--profile", &settings.profile])
            .status()
            .map_err(|e| RefreshError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        tracing::debug!("sso login exited with {:?}", status.code());

        if status.success() {
            Ok(())
        } else {
            Err(RefreshError::LoginFailed {
                code: status.code(),
            })
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn settings() -> AwsSettings {
        AwsSettings {
            profile: "dev".to_string(),
            region: "eu-west-1".to_string(),
        }
    }

    fn write_script(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("fake-aws");
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_check_identity_success() {
        let cli = SystemAwsCli::with_program("true");
        assert!(cli.check_identity(&settings()));
    }

    #[test]
    fn test_check_identity_failure() {
        let cli = SystemAwsCli::with_program("false");
        assert!(!cli.check_identity(&settings()));
    }

    #[test]
    fn test_check_identity_missing_program_is_not_fatal() {
        let cli = SystemAwsCli::with_program("aws-sso-refresh-no-such-program");
        assert!(!cli.check_identity(&settings()));
    }

    #[test]
    fn test_commands_receive_arguments_and_environment() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("calls.log");
        let script = write_script(
            dir.path(),
            &format!(
                "echo \"$* $AWS_PROFILE $AWS_REGION\" >> '{}'",
                log.display()
            ),
        );

        let cli = SystemAwsCli::with_program(script.to_string_lossy());
        assert!(cli.check_identity(&settings()));
        cli.sso_login(&settings()).unwrap();

        let calls = fs::read_to_string(&log).unwrap();
        let lines: Vec<&str> = calls.lines().collect();
        assert_eq!(
            lines,
            vec![
                "sts get-caller-identity dev eu-west-1",
                "sso login --profile dev dev eu-west-1",
            ]
        );
    }

    #[test]
    fn test_sso_login_failure_reports_exit_code() {
        let dir = TempDir::new().unwrap();
        let script = write_script(dir.path(), "exit 3");

        let cli = SystemAwsCli::with_program(script.to_string_lossy());
        let err = cli.sso_login(&settings()).unwrap_err();
        assert!(matches!(err, RefreshError::LoginFailed { code: Some(3) }));
        assert_eq!(err.to_string(), "aws sso login failed (exit code 3)");
    }

    #[test]
    fn test_sso_login_missing_program() {
        let cli = SystemAwsCli::with_program("aws-sso-refresh-no-such-program");
        let err = cli.sso_login(&settings()).unwrap_err();
        assert!(matches!(err, RefreshError::Spawn { .. }));
    }
}
