//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `TOML_CLI__<SECTION>__<KEY>`
//! 3. Config file: `--config FILE`, or `config.toml` in the platform config dir
//! 4. Built-in defaults
//!
//! ```toml
//! [output]
//! no_color = false
//! format = "auto"
//!
//! [edit]
//! backup = true
//!
//! [formula]
//! site = "https://github.com/chevdor"
//! repo = "toml-cli"
//! output_dir = "Formula"
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "TOML_CLI";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// `toml set` defaults.
    pub edit: EditConfig,
    /// `toml formula` defaults.
    pub formula: FormulaConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is left at `auto`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditConfig {
    /// Take a backup on every `--overwrite`, as if `--backup` were given.
    pub backup: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormulaConfig {
    /// Fallback for `--site`.
    pub site: Option<String>,
    /// Fallback for `--repo`.
    pub repo: Option<String>,
    /// Fallback for `--template`.
    pub template: Option<PathBuf>,
    /// Directory used by `toml formula --write`.
    pub output_dir: PathBuf,
}

impl Default for FormulaConfig {
    fn default() -> Self {
        Self {
            site: None,
            repo: None,
            template: None,
            output_dir: PathBuf::from("Formula"),
        }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// `config_file` is the path given with `--config`. It must exist; the
    /// default location may be absent.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let path = config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path);
        debug!(path = %path.display(), explicit = config_file.is_some(), "Loading configuration");

        let settings = config::Config::builder()
            .add_source(
                config::File::from(path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(config_file.is_some()),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("reading {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.toml-cli.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("io", "chevdor", "toml-cli")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".toml-cli.toml"))
    }
}
