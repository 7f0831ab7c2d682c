//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "read a key" or "generate a formula".

pub mod document_service;
pub mod formula_service;

pub use document_service::{DocumentService, GetFormat, SetOptions, backup_path};
pub use formula_service::FormulaService;
