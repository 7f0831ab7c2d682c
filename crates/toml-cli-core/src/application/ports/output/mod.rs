//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `toml-cli-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::FormulaRecord;
use crate::error::CoreResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `toml_cli_adapters::filesystem::LocalFilesystem` (production)
/// - `toml_cli_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read a whole UTF-8 file.
    fn read_to_string(&self, path: &Path) -> CoreResult<String>;

    /// Write content to a file, replacing it if it exists.
    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CoreResult<()>;

    /// Copy a file.
    fn copy(&self, from: &Path, to: &Path) -> CoreResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for turning a formula record into formula text.
///
/// Implemented by:
/// - `toml_cli_adapters::renderer::TemplateRenderer` (built-in or user template)
#[cfg_attr(test, mockall::automock)]
pub trait FormulaRenderer: Send + Sync {
    /// Render a resolved record.
    fn render(&self, record: &FormulaRecord) -> CoreResult<String>;
}
