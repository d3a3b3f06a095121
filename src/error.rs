use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefreshError {
    #[error(
        ".env file not found at {}. Create a .env file with at least AWS_PROFILE and AWS_REGION",
        .path.display()
    )]
    EnvFileNotFound { path: PathBuf },

    #[error("Failed to read .env file at {}: {source}", .path.display())]
    EnvFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} not set in .env")]
    MissingField(&'static str),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("aws sso login failed{}", .code.map(|c| format!(" (exit code {})", c)).unwrap_or_default())]
    LoginFailed { code: Option<i32> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RefreshError>;
