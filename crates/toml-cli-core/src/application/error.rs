//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The file does not exist.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The output file exists and overwriting was not requested.
    #[error("Output file already exists: {path}")]
    OutputExists { path: PathBuf },

    /// A template file could not be used.
    #[error("Invalid template {path}: {reason}")]
    InvalidTemplate { path: PathBuf, reason: String },

    /// A fields file could not be read as formula fields.
    #[error("Invalid fields file {path}: {reason}")]
    InvalidFieldsFile { path: PathBuf, reason: String },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// A value could not be serialized for output.
    #[error("Serialization failed: {reason}")]
    Serialization { reason: String },

    /// Shared state was poisoned.
    #[error("Storage lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FileNotFound { path } => vec![
                format!("No file at: {}", path.display()),
                "Check the path and the current directory".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have the required permissions".into(),
            ],
            Self::OutputExists { path } => vec![
                format!("{} already holds a formula", path.display()),
                "Use --force to replace it".into(),
                "Or pick another location with --output".into(),
            ],
            Self::InvalidTemplate { .. } => vec![
                "Templates use {{NAME}}-style placeholders".into(),
                "Drop --template to use the built-in formula template".into(),
            ],
            Self::InvalidFieldsFile { .. } => vec![
                "Fields files are flat TOML or JSON maps of strings".into(),
                "Example: name = \"Toml\"".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileNotFound { .. } => ErrorCategory::NotFound,
            Self::OutputExists { .. }
            | Self::InvalidTemplate { .. }
            | Self::InvalidFieldsFile { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. }
            | Self::RenderingFailed { .. }
            | Self::Serialization { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
