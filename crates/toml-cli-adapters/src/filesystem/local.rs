//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use toml_cli_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{CoreError, CoreResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> CoreResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn copy(&self, from: &Path, to: &Path) -> CoreResult<()> {
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(from, e, "copy file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> CoreError {
    if e.kind() == io::ErrorKind::NotFound {
        return ApplicationError::FileNotFound {
            path: path.to_path_buf(),
        }
        .into();
    }

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_read_and_copy() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = dir.path().join("a.toml");

        fs.write_file(&file, "a = 1\n").unwrap();
        assert!(fs.exists(&file));
        assert_eq!(fs.read_to_string(&file).unwrap(), "a = 1\n");

        let copy = dir.path().join("a.toml.bak");
        fs.copy(&file, &copy).unwrap();
        assert_eq!(std::fs::read_to_string(copy).unwrap(), "a = 1\n");
    }

    #[test]
    fn missing_file_maps_to_not_found() {
        let dir = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .read_to_string(&dir.path().join("missing.toml"))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Application(ApplicationError::FileNotFound { .. })
        ));
    }

    #[test]
    fn create_dir_all_is_recursive() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("Formula/nested");
        LocalFilesystem::new().create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
