//! Placeholder substitution renderer.

use toml_cli_core::{
    application::{ApplicationError, ports::FormulaRenderer},
    domain::FormulaRecord,
    error::CoreResult,
};
use tracing::{debug, instrument};

use crate::builtin_templates;

/// Renders a [`FormulaRecord`] through a `{{KEY}}` template.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    template: String,
}

impl TemplateRenderer {
    /// Renderer over the built-in formula template.
    pub fn builtin() -> Self {
        Self {
            template: builtin_templates::FORMULA.to_string(),
        }
    }

    /// Renderer over a user-supplied template.
    pub fn from_template(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FormulaRenderer for TemplateRenderer {
    #[instrument(skip_all, fields(name = record.name()))]
    fn render(&self, record: &FormulaRecord) -> CoreResult<String> {
        let text = record.render_context().render(&self.template)?;

        if text.trim().is_empty() {
            return Err(ApplicationError::RenderingFailed {
                reason: "template produced no output".into(),
            }
            .into());
        }

        debug!(bytes = text.len(), "Formula rendered");
        Ok(text)
    }
}
