use crate::config::EnvFile;
use crate::error::{RefreshError, Result};

pub const AWS_PROFILE: &str = "AWS_PROFILE";
pub const AWS_REGION: &str = "AWS_REGION";

/// Profile and region the aws CLI is scoped to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsSettings {
    pub profile: String,
    pub region: String,
}

impl AwsSettings {
    /// Resolve the required settings, checking AWS_PROFILE before AWS_REGION
    pub fn from_env_file(env: &EnvFile) -> Result<Self> {
        let profile = required(env, AWS_PROFILE)?;
        let region = required(env, AWS_REGION)?;

        Ok(Self { profile, region })
    }
}

fn required(env: &EnvFile, key: &'static str) -> Result<String> {
    match env.get(key) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(RefreshError::MissingField(key)),
    }
}

/// How a successful run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    AlreadyValid,
    Refreshed,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::AlreadyValid => "VALID",
            Outcome::Refreshed => "REFRESHED",
        }
    }
}
