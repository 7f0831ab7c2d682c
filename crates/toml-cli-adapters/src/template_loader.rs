//! Formula template loading.
//!
//! A template is a plain text file with `{{KEY}}` placeholders (see
//! [`crate::builtin_templates`] for the list). When no path is given the
//! built-in template is used.

use std::path::Path;

use tracing::{debug, instrument};

use toml_cli_core::{
    application::{ApplicationError, ports::Filesystem},
    error::CoreResult,
};

use crate::renderer::TemplateRenderer;

/// Loads formula templates through the [`Filesystem`] port.
pub struct TemplateLoader<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> TemplateLoader<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Build a renderer from `path`, or the built-in template when `None`.
    #[instrument(skip(self))]
    pub fn renderer(&self, path: Option<&Path>) -> CoreResult<TemplateRenderer> {
        match path {
            None => {
                debug!("Using built-in formula template");
                Ok(TemplateRenderer::builtin())
            }
            Some(path) => self.load(path).map(TemplateRenderer::from_template),
        }
    }

    /// Read a template file.
    ///
    /// Blank files are rejected: they would render an empty formula.
    pub fn load(&self, path: &Path) -> CoreResult<String> {
        let text = self.filesystem.read_to_string(path)?;
        if text.trim().is_empty() {
            return Err(ApplicationError::InvalidTemplate {
                path: path.to_path_buf(),
                reason: "template is empty".into(),
            }
            .into());
        }
        debug!(path = %path.display(), bytes = text.len(), "Template loaded");
        Ok(text)
    }
}
