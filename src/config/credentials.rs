//! API key storage in the local credential file.
//!
//! The file is a dotenv-style list of `KEY=value` lines. Only
//! `OPENAI_API_KEY` is consulted, and a blank value counts as absent.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Variable name holding the API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Errors raised while reading or writing the credential file.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Failed to read credential file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write credential file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("API key cannot be empty.")]
    Empty,
}

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Outcome of looking for a stored API key.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// API key found and non-blank.
    Configured(SecureString),
    /// The user has to be asked for a key.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl CredentialStatus {
    pub fn into_secret(self) -> Option<SecureString> {
        match self {
            CredentialStatus::Configured(secret) => Some(secret),
            CredentialStatus::Unconfigured { .. } => None,
        }
    }
}

/// Reads and writes the API key file.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up the stored key.
    ///
    /// A missing file, a missing variable and a whitespace-only value all
    /// resolve to `Unconfigured`. Only an unreadable existing file is an error.
    pub fn load(&self) -> Result<CredentialStatus, CredentialError> {
        if !self.path.exists() {
            return Ok(CredentialStatus::Unconfigured {
                reason: format!("{} does not exist", self.path.display()),
            });
        }

        let content = fs::read_to_string(&self.path).map_err(|e| CredentialError::Read {
            path: self.path.clone(),
            source: e,
        })?;

        match parse_api_key(&content) {
            Some(key) => Ok(CredentialStatus::Configured(SecureString::new(key))),
            None => Ok(CredentialStatus::Unconfigured {
                reason: format!("{} is not set", API_KEY_VAR),
            }),
        }
    }

    /// Persist `key`, replacing whatever the file held before.
    ///
    /// Returns the trimmed key that was written.
    pub fn save(&self, key: &str) -> Result<SecureString, CredentialError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(CredentialError::Empty);
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| CredentialError::Write {
                    path: self.path.clone(),
                    source: e,
                })?;
            }
        }

        fs::write(&self.path, format!("{}={}", API_KEY_VAR, key)).map_err(|e| {
            CredentialError::Write {
                path: self.path.clone(),
                source: e,
            }
        })?;

        tracing::info!(path = %self.path.display(), "Saved API key");
        Ok(SecureString::new(key.to_string()))
    }
}

/// Extract a non-blank `OPENAI_API_KEY` value from dotenv-style content.
///
/// Later assignments override earlier ones. `export` prefixes, `#` comments
/// and matching surrounding quotes are accepted.
pub fn parse_api_key(content: &str) -> Option<String> {
    let mut found = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((name, value)) = line.split_once('=') else {
            continue;
        };
        if name.trim() != API_KEY_VAR {
            continue;
        }
        found = Some(unquote(value.trim()).trim().to_string());
    }

    found.filter(|key| !key.is_empty())
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
