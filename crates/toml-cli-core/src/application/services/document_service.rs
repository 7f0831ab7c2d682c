//! Document Service - `check`, `get` and `set` on TOML files.
//!
//! Reads and writes go through the [`Filesystem`] port. The query is always
//! parsed before the file is touched, so a bad query never costs a read.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{JsonItem, Query, TomlDocument, ValueKind},
    error::CoreResult,
};

/// Output shape of [`DocumentService::get`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GetFormat {
    /// The item as JSON.
    #[default]
    Json,
    /// Strings without quotes; everything else as JSON.
    Raw,
    /// A TOML fragment holding the path down to the item.
    Toml,
}

/// Options for [`DocumentService::set`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetOptions {
    /// Rewrite the file instead of returning the edited document.
    pub overwrite: bool,
    /// Copy the original aside before overwriting.
    pub backup: bool,
    /// How to type the new value.
    pub kind: ValueKind,
}

/// Service for querying and editing TOML files.
pub struct DocumentService {
    filesystem: Box<dyn Filesystem>,
}

impl DocumentService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Read and parse a TOML file.
    pub fn load(&self, path: &Path) -> CoreResult<TomlDocument> {
        let text = self.filesystem.read_to_string(path)?;
        Ok(TomlDocument::parse(&text)?)
    }

    /// Does `query` resolve in the file at `path`?
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn check(&self, path: &Path, query: &str) -> CoreResult<bool> {
        let query = Query::parse(query)?;
        let doc = self.load(path)?;
        let found = doc.contains(&query);
        debug!(found, "Checked key");
        Ok(found)
    }

    /// Render the item at `query`.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn get(&self, path: &Path, query: &str, format: GetFormat) -> CoreResult<String> {
        let query = Query::parse(query)?;
        let doc = self.load(path)?;

        match format {
            GetFormat::Toml => Ok(doc.fragment(&query)?),
            GetFormat::Raw => {
                let item = doc.lookup(&query)?;
                match item.as_str() {
                    Some(s) => Ok(s.to_string()),
                    None => to_json(&JsonItem(item)),
                }
            }
            GetFormat::Json => to_json(&JsonItem(doc.lookup(&query)?)),
        }
    }

    /// Store `raw` at `query`.
    ///
    /// Returns the edited document, or `None` when the file was overwritten.
    #[instrument(skip(self, options), fields(path = %path.display()))]
    pub fn set(
        &self,
        path: &Path,
        query: &str,
        raw: &str,
        options: SetOptions,
    ) -> CoreResult<Option<String>> {
        let query = Query::parse(query)?;
        let mut doc = self.load(path)?;
        doc.set(&query, options.kind.to_item(raw)?)?;
        let text = doc.to_string();

        if !options.overwrite {
            return Ok(Some(text));
        }

        if options.backup {
            let backup = backup_path(path, Utc::now());
            self.filesystem.copy(path, &backup)?;
            info!(backup = %backup.display(), "Backup written");
        }
        self.filesystem.write_file(path, &text)?;
        info!("File overwritten");
        Ok(None)
    }
}

/// Where the backup of `path` taken at `now` goes: `<path>.<YYYYmmdd-HHMMSS-nanoseconds>`.
pub fn backup_path(path: &Path, now: DateTime<Utc>) -> PathBuf {
    PathBuf::from(format!(
        "{}.{}",
        path.display(),
        now.format("%Y%m%d-%H%M%S-%f")
    ))
}

fn to_json(item: &JsonItem<'_>) -> CoreResult<String> {
    serde_json::to_string(item).map_err(|e| {
        ApplicationError::Serialization {
            reason: e.to_string(),
        }
        .into()
    })
}
