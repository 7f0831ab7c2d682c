//! Homebrew formula records.
//!
//! A [`FormulaRecord`] is built once from a set of [`FormulaFields`] and never
//! changes afterwards. A new release is described by a new record.
//!
//! ## Default resolution
//!
//! Optional fields are filled in this order, each step seeing the previous
//! results:
//!
//! | Field         | Default                                 |
//! |---------------|-----------------------------------------|
//! | `binary_name` | lowercase(`name`)                       |
//! | `homepage`    | `site` + "/" + `repo`                   |
//! | `archive`     | `binary_name` + "_macos_v" + `version`  |

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::{error::DomainError, render_context::RenderContext};

/// A named input of the formula generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Description,
    Site,
    Repo,
    Version,
    Sha256,
    Homepage,
    Archive,
    BinaryName,
}

impl Field {
    /// Fields that have no default, in the order they are checked.
    pub const REQUIRED: [Field; 6] = [
        Field::Name,
        Field::Description,
        Field::Site,
        Field::Repo,
        Field::Version,
        Field::Sha256,
    ];

    pub const ALL: [Field; 9] = [
        Field::Name,
        Field::Description,
        Field::Site,
        Field::Repo,
        Field::Version,
        Field::Sha256,
        Field::Homepage,
        Field::Archive,
        Field::BinaryName,
    ];

    /// Key used in fields files and error messages.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Site => "site",
            Self::Repo => "repo",
            Self::Version => "version",
            Self::Sha256 => "sha256",
            Self::Homepage => "homepage",
            Self::Archive => "archive",
            Self::BinaryName => "binary_name",
        }
    }

    /// Placeholder name in formula templates.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "NAME",
            Self::Description => "DESCRIPTION",
            Self::Site => "SITE",
            Self::Repo => "REPO",
            Self::Version => "VERSION",
            Self::Sha256 => "SHA256",
            Self::Homepage => "HOMEPAGE",
            Self::Archive => "ARCHIVE",
            Self::BinaryName => "BIN",
        }
    }

    /// Command-line flag that sets this field.
    pub fn flag(self) -> &'static str {
        match self {
            Self::Version => "release",
            Self::BinaryName => "bin",
            other => other.key(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = DomainError;

    /// Accepts the snake_case key, the template placeholder, or `bin`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Field::ALL
            .into_iter()
            .find(|f| f.key() == normalized || f.placeholder().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| DomainError::UnknownField { key: s.to_string() })
    }
}

// ============================================================================
// Input
// ============================================================================

/// The generator's input: a mapping of field to value.
///
/// An empty string counts as present; only absent fields get defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormulaFields {
    values: BTreeMap<Field, String>,
}

impl FormulaFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Overlay `other` on top of `self`. Values in `other` win.
    pub fn merge(mut self, other: FormulaFields) -> Self {
        self.values.extend(other.values);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn require(&self, field: Field) -> Result<&str, DomainError> {
        self.get(field).ok_or(DomainError::MissingField { field })
    }
}

impl FromIterator<(Field, String)> for FormulaFields {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// A fully resolved formula. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormulaRecord {
    name: String,
    description: String,
    site: String,
    repo: String,
    homepage: String,
    version: String,
    sha256: String,
    archive: String,
    binary_name: String,
    download_url: String,
}

impl FormulaRecord {
    /// Resolve defaults and build a record.
    ///
    /// # Errors
    ///
    /// [`DomainError::MissingField`] for the first absent required field, in
    /// [`Field::REQUIRED`] order. Nothing else is validated.
    pub fn resolve(fields: &FormulaFields) -> Result<Self, DomainError> {
        let name = fields.require(Field::Name)?.to_string();
        let description = fields.require(Field::Description)?.to_string();
        let site = fields.require(Field::Site)?.to_string();
        let repo = fields.require(Field::Repo)?.to_string();
        let version = fields.require(Field::Version)?.to_string();
        let sha256 = fields.require(Field::Sha256)?.to_string();

        let binary_name = fields
            .get(Field::BinaryName)
            .map_or_else(|| name.to_lowercase(), str::to_string);
        let homepage = fields
            .get(Field::Homepage)
            .map_or_else(|| format!("{site}/{repo}"), str::to_string);
        let archive = fields
            .get(Field::Archive)
            .map_or_else(|| format!("{binary_name}_macos_v{version}"), str::to_string);

        let download_url = format!("{site}/{repo}/releases/download/v{version}/{archive}.tar.gz");

        Ok(Self {
            name,
            description,
            site,
            repo,
            homepage,
            version,
            sha256,
            archive,
            binary_name,
            download_url,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn homepage(&self) -> &str {
        &self.homepage
    }
    pub fn version(&self) -> &str {
        &self.version
    }
    pub fn sha256(&self) -> &str {
        &self.sha256
    }
    pub fn archive(&self) -> &str {
        &self.archive
    }
    pub fn binary_name(&self) -> &str {
        &self.binary_name
    }
    pub fn download_url(&self) -> &str {
        &self.download_url
    }

    /// File name the record is conventionally stored under in a tap.
    pub fn file_name(&self) -> String {
        format!("{}.rb", self.binary_name)
    }

    /// Placeholder values for rendering this record through a template.
    pub fn render_context(&self) -> RenderContext {
        RenderContext::new()
            .with_variable(Field::Name.placeholder(), &self.name)
            .with_variable(Field::Description.placeholder(), &self.description)
            .with_variable(Field::Site.placeholder(), &self.site)
            .with_variable(Field::Repo.placeholder(), &self.repo)
            .with_variable(Field::Homepage.placeholder(), &self.homepage)
            .with_variable(Field::Version.placeholder(), &self.version)
            .with_variable(Field::Sha256.placeholder(), &self.sha256)
            .with_variable(Field::Archive.placeholder(), &self.archive)
            .with_variable(Field::BinaryName.placeholder(), &self.binary_name)
            .with_variable("URL", &self.download_url)
    }
}
