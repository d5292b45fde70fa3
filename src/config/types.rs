use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Chat-completion endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Model identifier sent with every request.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the completion API (e.g., "https://api.openai.com/v1").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model requested for every completion.
    #[serde(default = "default_model")]
    pub model: String,
    /// File holding the `OPENAI_API_KEY=<value>` line.
    pub credential_path: PathBuf,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Config {
    /// Config with default endpoint settings and an explicit credential file.
    pub fn with_credential_path(credential_path: PathBuf) -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            credential_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_openai() {
        let config = Config::with_credential_path(PathBuf::from("/tmp/.env"));
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.credential_path, PathBuf::from("/tmp/.env"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"credential_path": "/opt/app/.env"}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
