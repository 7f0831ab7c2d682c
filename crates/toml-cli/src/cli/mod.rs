//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use toml_cli_core::domain::{Field, FormulaFields, ValueKind};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "toml",
    bin_name = "toml",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "A simple CLI for editing and querying TOML files",
    long_about = "toml reads values out of TOML files, edits them without \
                  losing formatting, and generates the Homebrew formula \
                  used to ship a release.",
    after_help = "EXAMPLES:\n\
        \x20 toml get Cargo.toml package.version\n\
        \x20 toml get --raw Cargo.toml 'bin[0].name'\n\
        \x20 toml set Cargo.toml package.version 0.3.0 --overwrite --backup\n\
        \x20 toml check Cargo.toml dependencies.serde\n\
        \x20 toml formula --vars release.toml --write",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check if a key exists.
    #[command(
        about = "Check if a key exists",
        after_help = "Prints `true` and exits 0 when the key exists, \
            otherwise prints `false` to stderr and exits 1.\n\n\
            EXAMPLES:\n\
            \x20 toml check Cargo.toml dependencies.serde\n\
            \x20 toml check Cargo.toml 'bin[1]'"
    )]
    Check(CheckArgs),

    /// Print some data from the file.
    #[command(
        about = "Print some data from the file",
        after_help = "EXAMPLES:\n\
            \x20 toml get Cargo.toml package            # JSON object\n\
            \x20 toml get --raw Cargo.toml package.name # bare string\n\
            \x20 toml get --output-toml Cargo.toml dependencies.serde"
    )]
    Get(GetArgs),

    /// Edit the file to set some data.
    #[command(
        about = "Edit the file to set some data",
        after_help = "EXAMPLES:\n\
            \x20 toml set Cargo.toml package.version 0.3.0\n\
            \x20 toml set Cargo.toml package.publish false --overwrite\n\
            \x20 toml set Cargo.toml package.version 1 --type string --overwrite --backup"
    )]
    Set(SetArgs),

    /// Generate a Homebrew formula.
    #[command(
        about = "Generate a Homebrew formula",
        after_help = "EXAMPLES:\n\
            \x20 toml formula --name Toml --description 'TOML CLI' \\\n\
            \x20     --site https://github.com/chevdor --repo toml-cli \\\n\
            \x20     --release 0.2.4 --sha256 <sum>\n\
            \x20 toml formula --vars release.toml --write --force\n\
            \x20 toml formula --vars release.json --output-format json"
    )]
    Formula(FormulaArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 toml completions bash > ~/.local/share/bash-completion/completions/toml\n\
            \x20 toml completions zsh  > ~/.zfunc/_toml\n\
            \x20 toml completions fish > ~/.config/fish/completions/toml.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 toml config get formula.site\n\
            \x20 toml config list\n\
            \x20 toml config path"
    )]
    Config(ConfigCommands),
}

// ── check / get / set ─────────────────────────────────────────────────────────

/// Arguments for `toml check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to the TOML file to read.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Query within the TOML data (e.g. `dependencies.serde`, `foo[0].bar`).
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for `toml get`.
#[derive(Debug, Args)]
pub struct GetArgs {
    /// Path to the TOML file to read.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Query within the TOML data (e.g. `dependencies.serde`, `foo[0].bar`).
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Print as a TOML fragment (default: print as JSON).
    #[arg(long = "output-toml", conflicts_with = "raw")]
    pub output_toml: bool,

    /// Print strings without quotes.
    #[arg(short = 'r', long = "raw")]
    pub raw: bool,
}

/// Arguments for `toml set`.
#[derive(Debug, Args)]
pub struct SetArgs {
    /// Path to the TOML file to read.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Query within the TOML data (e.g. `dependencies.serde`, `foo[0].bar`).
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Value to place at the given spot.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Overwrite the TOML file (default: print to stdout).
    #[arg(long = "overwrite")]
    pub overwrite: bool,

    /// Copy the file aside before overwriting it.
    #[arg(long = "backup")]
    pub backup: bool,

    /// How to type the value.
    #[arg(
        short = 't',
        long = "type",
        value_enum,
        default_value = "auto",
        help = "Value type (auto tries integer, then bool, then string)"
    )]
    pub value_type: ValueType,
}

/// Value typing for `toml set`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ValueType {
    #[default]
    Auto,
    String,
    #[value(alias = "int")]
    Integer,
    Float,
    #[value(alias = "boolean")]
    Bool,
}

impl From<ValueType> for ValueKind {
    fn from(value: ValueType) -> Self {
        match value {
            ValueType::Auto => ValueKind::Auto,
            ValueType::String => ValueKind::String,
            ValueType::Integer => ValueKind::Integer,
            ValueType::Float => ValueKind::Float,
            ValueType::Bool => ValueKind::Bool,
        }
    }
}

// ── formula ───────────────────────────────────────────────────────────────────

/// Arguments for `toml formula`.
#[derive(Debug, Args)]
pub struct FormulaArgs {
    /// Formula class name.
    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// One-line description.
    #[arg(long = "description", value_name = "TEXT")]
    pub description: Option<String>,

    /// Base URL of the hosting account, e.g. `https://github.com/chevdor`.
    #[arg(long = "site", value_name = "URL")]
    pub site: Option<String>,

    /// Repository name under the site.
    #[arg(long = "repo", value_name = "REPO")]
    pub repo: Option<String>,

    /// Release version, without the leading `v`.
    #[arg(long = "release", value_name = "VERSION")]
    pub version: Option<String>,

    /// SHA-256 of the release archive.
    #[arg(long = "sha256", value_name = "HEX")]
    pub sha256: Option<String>,

    /// Project homepage (default: `<site>/<repo>`).
    #[arg(long = "homepage", value_name = "URL")]
    pub homepage: Option<String>,

    /// Archive base name (default: `<bin>_macos_v<version>`).
    #[arg(long = "archive", value_name = "NAME")]
    pub archive: Option<String>,

    /// Installed binary name (default: lowercase name).
    #[arg(long = "bin", value_name = "NAME")]
    pub binary_name: Option<String>,

    /// TOML or JSON file with field values.
    #[arg(long = "vars", value_name = "FILE")]
    pub vars: Option<PathBuf>,

    /// Custom formula template.
    ///
    /// Plain text with `{{ KEY }}` placeholders: NAME, DESCRIPTION, SITE,
    /// REPO, HOMEPAGE, VERSION, SHA256, ARCHIVE, BIN and the precomputed
    /// download URL. Jinja-style `{% set %}` blocks and filters such as
    /// `| default(...)` are not evaluated; their placeholders stay
    /// unresolved and rendering fails.
    #[arg(long = "template", value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Write the formula to this file.
    #[arg(short = 'o', long = "output", value_name = "FILE", conflicts_with = "write")]
    pub output: Option<PathBuf>,

    /// Write the formula to `<formula.output_dir>/<bin>.rb`.
    #[arg(short = 'w', long = "write")]
    pub write: bool,

    /// Replace an existing formula file.
    #[arg(short = 'f', long = "force")]
    pub force: bool,
}

impl FormulaArgs {
    /// Fields given on the command line.
    pub fn flag_fields(&self) -> FormulaFields {
        [
            (Field::Name, &self.name),
            (Field::Description, &self.description),
            (Field::Site, &self.site),
            (Field::Repo, &self.repo),
            (Field::Version, &self.version),
            (Field::Sha256, &self.sha256),
            (Field::Homepage, &self.homepage),
            (Field::Archive, &self.archive),
            (Field::BinaryName, &self.binary_name),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.clone().map(|v| (field, v)))
        .collect()
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `toml completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `toml config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Query into the configuration, e.g. `formula.site`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
