//! Formula renderers.

mod template;

pub use template::TemplateRenderer;
