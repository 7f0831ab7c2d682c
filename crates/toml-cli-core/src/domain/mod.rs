// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer.
//!
//! Pure logic only: the query language, TOML documents, formula records and
//! template substitution. All I/O goes through the ports defined in the
//! application layer.
//!
//! - **No I/O**: no filesystem, network, or clock access
//! - **Immutable records**: a [`FormulaRecord`] never changes once built
//! - **No panics on user input**: missing keys and bad queries are errors

pub mod document;
pub mod error;
pub mod formula;
pub mod json;
pub mod query;
pub mod render_context;

pub use document::{TomlDocument, ValueKind};
pub use error::{DomainError, ErrorCategory};
pub use formula::{Field, FormulaFields, FormulaRecord};
pub use json::JsonItem;
pub use query::{PathSegment, Query};
pub use render_context::RenderContext;
