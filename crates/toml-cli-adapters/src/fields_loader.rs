//! Formula fields files.
//!
//! A fields file is a flat TOML or JSON map. Keys are field keys
//! (`binary_name`), template placeholders (`BIN`) or `bin`. Scalar values are
//! taken as strings: `version = 0.3` and `version = "0.3"` mean the same.
//!
//! ```toml
//! name = "Toml"
//! description = "A TOML command line utility"
//! version = "0.2.4"
//! sha256 = "f3cb..."
//! ```

use std::path::Path;

use tracing::{debug, instrument, warn};

use toml_cli_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::{Field, FormulaFields},
    error::{CoreError, CoreResult},
};

/// Syntax of a fields file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldsFormat {
    Toml,
    Json,
}

impl FieldsFormat {
    /// Pick the format from the file extension. Anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Reads [`FormulaFields`] from disk through the [`Filesystem`] port.
pub struct FieldsLoader<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> FieldsLoader<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn load(&self, path: &Path) -> CoreResult<FormulaFields> {
        let text = self.filesystem.read_to_string(path)?;
        parse(&text, FieldsFormat::from_path(path), path)
    }
}

/// Parse fields from text. `path` is only used in error messages.
pub fn parse(text: &str, format: FieldsFormat, path: &Path) -> CoreResult<FormulaFields> {
    let invalid = |reason: String| -> CoreError {
        ApplicationError::InvalidFieldsFile {
            path: path.to_path_buf(),
            reason,
        }
        .into()
    };

    let entries: Vec<(String, Option<String>)> = match format {
        FieldsFormat::Toml => {
            let table: toml::Table = toml::from_str(text).map_err(|e| invalid(e.to_string()))?;
            table
                .into_iter()
                .map(|(key, value)| match toml_scalar(value) {
                    Some(value) => Ok((key, Some(value))),
                    None => Err(invalid(format!("`{key}` must be a plain value"))),
                })
                .collect::<CoreResult<_>>()?
        }
        FieldsFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> =
                serde_json::from_str(text).map_err(|e| invalid(e.to_string()))?;
            map.into_iter()
                .map(|(key, value)| match value {
                    serde_json::Value::Null => Ok((key, None)),
                    serde_json::Value::String(s) => Ok((key, Some(s))),
                    serde_json::Value::Bool(b) => Ok((key, Some(b.to_string()))),
                    serde_json::Value::Number(n) => Ok((key, Some(n.to_string()))),
                    _ => Err(invalid(format!("`{key}` must be a plain value"))),
                })
                .collect::<CoreResult<_>>()?
        }
    };

    let mut fields = FormulaFields::new();
    for (key, value) in entries {
        let Ok(field) = key.parse::<Field>() else {
            warn!(key = %key, "Ignoring unknown formula field");
            continue;
        };
        match value {
            Some(value) => fields.set(field, value),
            None => debug!(field = %field, "Null value left unset"),
        }
    }

    debug!(count = fields.len(), "Fields parsed");
    Ok(fields)
}

fn toml_scalar(value: toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s),
        toml::Value::Integer(i) => Some(i.to_string()),
        toml::Value::Float(f) => Some(f.to_string()),
        toml::Value::Boolean(b) => Some(b.to_string()),
        toml::Value::Datetime(d) => Some(d.to_string()),
        toml::Value::Array(_) | toml::Value::Table(_) => None,
    }
}
