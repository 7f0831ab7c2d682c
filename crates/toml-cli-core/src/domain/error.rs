// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::formula::Field;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so services can report them more than once)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Formula generation
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingField { field: Field },

    #[error("Unknown formula field '{key}'")]
    UnknownField { key: String },

    #[error("Template placeholder '{{{{{name}}}}}' has no value")]
    UnresolvedPlaceholder { name: String },

    #[error("Unterminated placeholder at byte {position} of template")]
    UnterminatedPlaceholder { position: usize },

    // ========================================================================
    // Query language
    // ========================================================================
    #[error("bad query '{query}' at position {position}: {reason}")]
    BadQuery {
        query: String,
        position: usize,
        reason: String,
    },

    // ========================================================================
    // Document access
    // ========================================================================
    #[error("Invalid TOML document: {reason}")]
    InvalidDocument { reason: String },

    #[error("No value at '{query}'")]
    KeyNotFound { query: String },

    #[error("numeric index into non-array at '{query}'")]
    NotArray { query: String },

    #[error("array index {index} out of bounds (length {len}) at '{query}'")]
    ArrayIndexOutOfBounds {
        query: String,
        index: usize,
        len: usize,
    },

    #[error("cannot print '{query}' as a TOML fragment: it lies inside inline data")]
    UnsupportedFragment { query: String },

    #[error("cannot replace the document root with a single value")]
    RootAssignment,

    #[error("'{value}' is not a valid {kind}")]
    InvalidValue { value: String, kind: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingField { field } => vec![
                format!("Provide it with --{} or in the --vars file", field.flag()),
                "Required fields: name, description, site, repo, version, sha256".into(),
            ],
            Self::UnknownField { key } => vec![
                format!("'{}' is not a formula field", key),
                "Known fields: name, description, site, repo, version, sha256, homepage, archive, binary_name".into(),
            ],
            Self::UnresolvedPlaceholder { name } => vec![
                format!("The template refers to '{}', which is not a formula field", name),
                "Available: NAME, DESCRIPTION, SITE, REPO, HOMEPAGE, VERSION, SHA256, ARCHIVE, BIN, URL".into(),
            ],
            Self::BadQuery { .. } => vec![
                "Queries look like: dependencies.serde, foo[0].bar, \"dotted.key\".x".into(),
                "Use '.' to address the whole document".into(),
            ],
            Self::KeyNotFound { query } => vec![
                format!("Nothing is stored at '{}'", query),
                "Use 'toml check' to test for a key without failing loudly".into(),
            ],
            Self::NotArray { .. } | Self::ArrayIndexOutOfBounds { .. } => vec![
                "Index segments like [0] only apply to existing array elements".into(),
            ],
            Self::UnsupportedFragment { .. } => vec![
                "Drop --output-toml to print the value as JSON instead".into(),
            ],
            Self::InvalidValue { kind, .. } => vec![
                format!("Pass a value that parses as {}, or use --type string", kind),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::KeyNotFound { .. } => ErrorCategory::NotFound,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
