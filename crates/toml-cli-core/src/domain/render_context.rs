//! Placeholder substitution for formula templates.
//!
//! Placeholders are written `{{KEY}}`; whitespace inside the braces is
//! ignored, so `{{ KEY }}` works too. Substitution is a single left-to-right
//! pass: substituted values are never scanned again, which keeps the output
//! independent of variable order.

use std::collections::BTreeMap;

use crate::domain::error::DomainError;

/// Context for template rendering.
///
/// A value object holding every variable a template may reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, consuming self and returning the new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Render a template string.
    ///
    /// # Errors
    ///
    /// - [`DomainError::UnresolvedPlaceholder`] for a `{{KEY}}` with no value.
    /// - [`DomainError::UnterminatedPlaceholder`] for a `{{` with no `}}`.
    pub fn render(&self, template: &str) -> Result<String, DomainError> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        let mut offset = 0;

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after_open = &rest[open + 2..];
            let close = after_open
                .find("}}")
                .ok_or(DomainError::UnterminatedPlaceholder {
                    position: offset + open,
                })?;

            let key = after_open[..close].trim();
            let value = self
                .get(key)
                .ok_or_else(|| DomainError::UnresolvedPlaceholder {
                    name: key.to_string(),
                })?;
            out.push_str(value);

            let consumed = open + 2 + close + 2;
            offset += consumed;
            rest = &rest[consumed..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_with_and_without_spaces() {
        let ctx = RenderContext::new().with_variable("NAME", "Toml");
        assert_eq!(
            ctx.render("class {{NAME}} / {{ NAME }}").unwrap(),
            "class Toml / Toml"
        );
    }

    #[test]
    fn values_are_not_rescanned() {
        let ctx = RenderContext::new()
            .with_variable("A", "{{B}}")
            .with_variable("B", "b");
        assert_eq!(ctx.render("{{A}}-{{B}}").unwrap(), "{{B}}-b");
    }

    #[test]
    fn unknown_placeholder_is_an_error() {
        let ctx = RenderContext::new();
        assert_eq!(
            ctx.render("x {{ LICENSE }}"),
            Err(DomainError::UnresolvedPlaceholder {
                name: "LICENSE".into()
            })
        );
    }

    #[test]
    fn unterminated_placeholder_reports_position() {
        let ctx = RenderContext::new().with_variable("A", "a");
        assert_eq!(
            ctx.render("{{A}} then {{A"),
            Err(DomainError::UnterminatedPlaceholder { position: 11 })
        );
    }

    #[test]
    fn text_without_placeholders_is_unchanged() {
        let ctx = RenderContext::new();
        assert_eq!(ctx.render("end\n").unwrap(), "end\n");
    }
}
