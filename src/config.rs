//! Application configuration
//!
//! Configuration is read from an optional YAML file, then overridden from
//! `TRIVIA_*` environment variables, then validated. Every section has
//! defaults, so an empty file (or no file) is a valid configuration.

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::pagination::{PageSize, QUESTIONS_PER_PAGE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Question database settings
    #[serde(default)]
    pub database: DatabaseSettings,

    /// Pagination settings
    #[serde(default)]
    pub pagination: PaginationSettings,

    /// Interactive quiz settings
    #[serde(default)]
    pub quiz: QuizSettings,

    /// Token verification for mutating endpoints
    #[serde(default)]
    pub auth: AuthConfig,
}

// ============================================================================
// Sections
// ============================================================================

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Question database settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// DuckDB file; in-memory when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Load the stock questions into an empty database
    #[serde(default = "default_true")]
    pub seed: bool,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: None,
            seed: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Pagination settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationSettings {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> usize {
    QUESTIONS_PER_PAGE
}

/// Interactive quiz settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    /// Questions per `play` session
    #[serde(default = "default_rounds")]
    pub rounds: usize,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            rounds: default_rounds(),
        }
    }
}

fn default_rounds() -> usize {
    5
}

// ============================================================================
// Loading
// ============================================================================

impl AppConfig {
    /// Load configuration from `path` (if any) and the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;
        Self::from_yaml(&content)
    }

    /// Parse YAML config content
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply `TRIVIA_*` overrides using `lookup` to read variables
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("TRIVIA_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("TRIVIA_PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::invalid_value("TRIVIA_PORT", format!("'{port}' is not a port")))?;
        }
        if let Some(path) = lookup("TRIVIA_DATABASE") {
            self.database.path = Some(PathBuf::from(path));
        }
        if let Some(size) = lookup("TRIVIA_PAGE_SIZE") {
            self.pagination.page_size = size.trim().parse().map_err(|_| {
                Error::invalid_value("TRIVIA_PAGE_SIZE", format!("'{size}' is not a number"))
            })?;
        }
        if let Some(secret) = lookup("TRIVIA_AUTH_SECRET") {
            self.auth.secret = Some(secret);
        }
        Ok(())
    }

    /// Check values that deserialization cannot
    pub fn validate(&self) -> Result<()> {
        self.page_size()?;
        if self.server.host.trim().is_empty() {
            return Err(Error::invalid_value("server.host", "must not be empty"));
        }
        Ok(())
    }

    /// Validated page size
    pub fn page_size(&self) -> Result<PageSize> {
        PageSize::new(self.pagination.page_size)
            .map_err(|_| Error::invalid_value("pagination.page_size", "must be positive"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.path, None);
        assert!(config.database.seed);
        assert_eq!(config.pagination.page_size, 10);
        assert_eq!(config.quiz.rounds, 5);
        assert!(!config.auth.is_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(AppConfig::from_yaml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r"
server:
  port: 5000
pagination:
  page_size: 25
auth:
  secret: s3cret
  audience: trivia
";
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.pagination.page_size, 25);
        assert_eq!(config.auth.secret.as_deref(), Some("s3cret"));
        assert_eq!(config.auth.audience.as_deref(), Some("trivia"));
        assert!(config.database.seed);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = AppConfig::from_yaml("server: [").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = AppConfig::from_yaml("pagination:\n  page_size: 0\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("pagination.page_size"));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config
            .apply_overrides(env(&[
                ("TRIVIA_PORT", "9090"),
                ("TRIVIA_DATABASE", "/tmp/trivia.duckdb"),
                ("TRIVIA_PAGE_SIZE", "5"),
                ("TRIVIA_AUTH_SECRET", "abc"),
            ]))
            .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(
            config.database.path,
            Some(PathBuf::from("/tmp/trivia.duckdb"))
        );
        assert_eq!(config.page_size().unwrap().get(), 5);
        assert!(config.auth.is_enabled());
    }

    #[test]
    fn test_bad_env_override() {
        let mut config = AppConfig::default();
        let err = config
            .apply_overrides(env(&[("TRIVIA_PORT", "eighty")]))
            .unwrap_err();
        assert!(err.to_string().contains("TRIVIA_PORT"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "database:\n  seed: false\nquiz:\n  rounds: 3").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert!(!config.database.seed);
        assert_eq!(config.quiz.rounds, 3);
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::from_file(Path::new("/nonexistent/trivia.yaml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
