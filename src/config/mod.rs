// .env file loading
use crate::error::{RefreshError, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Name of the env file looked up next to the executable
pub const ENV_FILE_NAME: &str = ".env";

/// Flat `KEY=VALUE` mapping read from a .env file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    vars: HashMap<String, String>,
}

impl EnvFile {
    /// Parse .env contents
    ///
    /// Blank lines, `#` comments and lines without `=` are skipped.
    /// Lines are split on the first `=` only and both sides are trimmed.
    /// When a key repeats, the last occurrence wins.
    pub fn parse(contents: &str) -> Self {
        let mut vars = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                vars.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        Self { vars }
    }

    /// Read and parse the .env file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!("Loading env file from: {}", path.display());

        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RefreshError::EnvFileNotFound {
                path: path.to_path_buf(),
            },
            _ => RefreshError::EnvFileUnreadable {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let env_file = Self::parse(&contents);
        if env_file.is_empty() {
            tracing::warn!("No KEY=VALUE entries found in {}", path.display());
        }
        tracing::debug!("Parsed {} keys from {}", env_file.len(), path.display());

        Ok(env_file)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Get the .env path next to the running executable
pub fn default_env_file_path() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().ok_or_else(|| {
        RefreshError::ConfigError(format!(
            "Could not determine directory of executable: {}",
            exe.display()
        ))
    })?;

    Ok(dir.join(ENV_FILE_NAME))
}
