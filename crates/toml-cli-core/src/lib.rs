//! toml-cli Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `toml`
//! command line tool: querying and editing TOML documents, and generating
//! Homebrew formula files. It follows hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            toml-cli (CLI)               │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (DocumentService, FormulaService)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Filesystem, Renderer)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    toml-cli-adapters (Infrastructure)   │
//! │ (LocalFilesystem, TemplateRenderer, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Query, TomlDocument, FormulaRecord)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use toml_cli_core::domain::{Query, TomlDocument};
//!
//! let doc: TomlDocument = "[package]\nname = \"toml-cli\"\n".parse().unwrap();
//! let query = Query::parse("package.name").unwrap();
//! assert_eq!(doc.lookup(&query).unwrap().as_str(), Some("toml-cli"));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DocumentService, FormulaService, GetFormat, SetOptions,
        ports::{Filesystem, FormulaRenderer},
    };
    pub use crate::domain::{
        Field, FormulaFields, FormulaRecord, Query, RenderContext, TomlDocument, ValueKind,
    };
    pub use crate::error::{CoreError, CoreResult, ErrorCategory};
}
