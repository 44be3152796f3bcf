//! Error types for the trivia API
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Empty pages and exhausted quizzes are not errors; see [`crate::outcome`].

use thiserror::Error;

/// The main error type for the trivia API
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Request Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Question with id {id} does not exist")]
    QuestionNotFound { id: i64 },

    #[error("Resource not found: {message}")]
    NotFound { message: String },

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    #[error("Permission '{permission}' not granted")]
    Forbidden { permission: String },

    // ============================================================================
    // Storage Errors
    // ============================================================================
    #[error("Database error: {message}")]
    Database { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a forbidden error
    pub fn forbidden(permission: impl Into<String>) -> Self {
        Self::Forbidden {
            permission: permission.into(),
        }
    }

    /// Create a database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    /// HTTP status code this error maps to
    pub fn status_code(&self) -> u16 {
        match self {
            Error::JsonParse(_) | Error::BadRequest { .. } => 400,
            Error::Auth { .. } => 401,
            Error::Forbidden { .. } => 403,
            Error::NotFound { .. } | Error::FileNotFound { .. } => 404,
            Error::Validation { .. } | Error::QuestionNotFound { .. } => 422,
            _ => 500,
        }
    }

    /// Check if this error was caused by the client rather than the server
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

/// Result type alias for the trivia API
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::invalid_value("page_size", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'page_size': must be positive"
        );

        let err = Error::QuestionNotFound { id: 42 };
        assert_eq!(err.to_string(), "Question with id 42 does not exist");

        let err = Error::forbidden("delete:questions");
        assert_eq!(err.to_string(), "Permission 'delete:questions' not granted");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::bad_request("x").status_code(), 400);
        assert_eq!(Error::auth("x").status_code(), 401);
        assert_eq!(Error::forbidden("x").status_code(), 403);
        assert_eq!(Error::not_found("x").status_code(), 404);
        assert_eq!(Error::validation("x").status_code(), 422);
        assert_eq!(Error::QuestionNotFound { id: 1 }.status_code(), 422);
        assert_eq!(Error::database("x").status_code(), 500);
        assert_eq!(Error::config("x").status_code(), 500);

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(Error::from(json_err).status_code(), 400);
    }

    #[test]
    fn test_is_client_error() {
        assert!(Error::validation("x").is_client_error());
        assert!(Error::auth("x").is_client_error());
        assert!(!Error::database("x").is_client_error());
        assert!(!Error::Other("x".to_string()).is_client_error());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
