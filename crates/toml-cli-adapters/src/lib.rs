//! Infrastructure adapters for toml-cli.
//!
//! This crate implements the ports defined in `toml_cli_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod fields_loader;
pub mod filesystem;
pub mod renderer;
pub mod template_loader;

// Re-export commonly used adapters
pub use fields_loader::{FieldsFormat, FieldsLoader};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::TemplateRenderer;
pub use template_loader::TemplateLoader;
