//! Formula Service - turn formula fields into formula text.
//!
//! Generation is pure: resolve the record, render it. Writing the result to a
//! file is a separate call so callers that only print never touch the
//! filesystem.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, FormulaRenderer},
    },
    domain::{FormulaFields, FormulaRecord},
    error::CoreResult,
};

/// Service for formula generation.
pub struct FormulaService {
    renderer: Box<dyn FormulaRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl FormulaService {
    pub fn new(renderer: Box<dyn FormulaRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Resolve defaults without rendering.
    pub fn resolve(&self, fields: &FormulaFields) -> CoreResult<FormulaRecord> {
        let record = FormulaRecord::resolve(fields)?;
        debug!(
            name = record.name(),
            version = record.version(),
            binary = record.binary_name(),
            "Formula resolved"
        );
        Ok(record)
    }

    /// Resolve and render.
    #[instrument(skip_all)]
    pub fn generate(&self, fields: &FormulaFields) -> CoreResult<(FormulaRecord, String)> {
        let record = self.resolve(fields)?;
        let text = self.renderer.render(&record)?;
        Ok((record, text))
    }

    /// Resolve, render and write to `path`.
    ///
    /// An existing file is only replaced when `force` is set.
    #[instrument(skip(self, fields), fields(path = %path.display()))]
    pub fn write(
        &self,
        fields: &FormulaFields,
        path: &Path,
        force: bool,
    ) -> CoreResult<FormulaRecord> {
        let (record, text) = self.generate(fields)?;

        if self.filesystem.exists(path) && !force {
            return Err(ApplicationError::OutputExists {
                path: path.to_path_buf(),
            }
            .into());
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, &text)?;

        info!(version = record.version(), "Formula written");
        Ok(record)
    }
}
