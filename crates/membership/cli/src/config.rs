//! CLI configuration

use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    /// Platform API endpoint
    pub endpoint: Option<String>,

    /// API token sent as a bearer credential
    pub token: Option<String>,

    /// Domain used when `--domain` is not given
    pub default_domain: Option<String>,

    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
}

impl CliConfig {
    /// Load configuration from file
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            Self::parse(&contents)
        } else {
            Ok(CliConfig::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn parse(contents: &str) -> CliResult<Self> {
        toml::from_str(contents).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Get the default configuration file path
    fn default_config_path() -> CliResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CliError::Config("Cannot find config directory".into()))?;
        Ok(config_dir.join("members").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert!(config.endpoint.is_none());
        assert!(config.default_domain.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        // Should return default config when file doesn't exist
        let config = CliConfig::load(Some("/nonexistent/path/config.toml")).unwrap();
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_parse_config() {
        let config = CliConfig::parse(
            r#"
            endpoint = "https://api.example.net"
            default_domain = "docs"
            timeout_seconds = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.endpoint.as_deref(), Some("https://api.example.net"));
        assert_eq!(config.default_domain.as_deref(), Some("docs"));
        assert_eq!(config.timeout_seconds, Some(5));
        assert!(config.token.is_none());
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = CliConfig::parse("timeout_seconds = \"soon\"");
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
