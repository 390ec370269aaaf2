// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commitfmt.
//!
//! Format violations are never errors: they are reported as diagnostics on
//! the parsed message. The types here cover genuine faults in the
//! collaborators around the checker (config files, git, hooks, I/O).

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commitfmt operations.
#[derive(Error, Debug)]
pub enum CfError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Validation verdict
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

/// Verdict errors returned by the `check` command.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("commit message check failed: {errors} errors, {warnings} warnings")]
    Failed { errors: usize, warnings: usize },
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Hook already exists: {hook} (use --force to replace it)")]
    AlreadyExists { hook: String },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },
}

/// Result type alias for commitfmt operations.
pub type Result<T> = std::result::Result<T, CfError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CfError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config"),
        };
        assert!(err.to_string().contains("/path/to/config"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::Failed {
            errors: 2,
            warnings: 1,
        };
        assert!(err.to_string().contains("2 errors"));
        assert!(err.to_string().contains("1 warnings"));
    }

    #[test]
    fn test_cf_error_from_config_error() {
        let config_err = ConfigError::InvalidValue {
            key: "rules.disabled".to_string(),
            message: "unknown rule".to_string(),
        };
        let err: CfError = config_err.into();
        assert!(err.to_string().contains("rules.disabled"));
    }

    #[test]
    fn test_context() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = io.context("reading message").unwrap_err();
        assert_eq!(err.to_string(), "reading message: missing");
    }
}
