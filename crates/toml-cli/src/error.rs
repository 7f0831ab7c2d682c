//! Errors surfaced by the `toml` binary and how they reach the terminal.
//!
//! Each error knows its [`Severity`], which fixes the process exit code, and
//! a list of hints printed under the message.

use std::error::Error as _;
use std::io;

use owo_colors::OwoColorize;
use thiserror::Error;

use toml_cli_core::{
    domain::DomainError,
    error::{CoreError, ErrorCategory},
};

pub type CliResult<T> = Result<T, CliError>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be read or written back out.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Anything raised by the core services or the adapters.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Writing to the terminal failed.
    #[error("I/O error while {context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// A result could not be turned into JSON or TOML text.
    #[error("Failed to encode {what}")]
    Encoding {
        what: String,
        #[source]
        source: BoxError,
    },
}

/// Outcome class of a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Bad arguments, query or input file contents.
    Usage,
    /// The file or key asked for is not there.
    Missing,
    /// Settings are unusable.
    Config,
    /// Bug or system failure.
    Failure,
}

impl Severity {
    pub fn exit_code(self) -> u8 {
        match self {
            Severity::Failure => 1,
            Severity::Usage => 2,
            Severity::Missing => 3,
            Severity::Config => 4,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(source: io::Error) -> Self {
        CliError::Io {
            context: "writing output".into(),
            source,
        }
    }
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        CliError::Core(err.into())
    }
}

impl CliError {
    pub fn severity(&self) -> Severity {
        match self {
            Self::Config { .. } => Severity::Config,
            Self::Core(core) => match core.category() {
                ErrorCategory::Validation => Severity::Usage,
                ErrorCategory::NotFound => Severity::Missing,
                ErrorCategory::Internal => Severity::Failure,
            },
            Self::Io { .. } | Self::Encoding { .. } => Severity::Failure,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.severity().exit_code()
    }

    /// What the user can try next.
    pub fn hints(&self) -> Vec<String> {
        match self {
            Self::Config { .. } => vec![
                "Run `toml config path` to see which file is read".into(),
                "Environment overrides look like TOML_CLI__FORMULA__SITE=...".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::Io { .. } => vec!["Check that stdout/stderr are still open".into()],
            Self::Encoding { .. } => vec!["Try a different --output-format".into()],
        }
    }

    /// Message, optional cause chain and hints, ready for stderr.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, f: fn(&str) -> String| {
            if color { f(text) } else { text.to_owned() }
        };

        let mut out = format!(
            "\n{} {}\n",
            paint("Error:", |s| s.red().bold().to_string()),
            paint(&self.to_string(), |s| s.red().to_string()),
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&format!(
                    "  {}\n",
                    paint(&format!("Caused by: {err}"), |s| s.dimmed().to_string())
                ));
                cause = err.source();
            }
        }

        let hints = self.hints();
        if !hints.is_empty() {
            out.push_str(&format!(
                "\n{}\n",
                paint("Suggestions:", |s| s.yellow().bold().to_string())
            ));
            for hint in hints {
                out.push_str(&format!("  {hint}\n"));
            }
        }

        if !verbose {
            out.push_str(&format!(
                "\n{}\n",
                paint("Use -v / --verbose for more details.", |s| s.dimmed().to_string())
            ));
        }

        out
    }

    /// Record the failure. Expected failures stay below the default level.
    pub fn log(&self) {
        match self.severity() {
            Severity::Usage | Severity::Missing => tracing::debug!(error = %self, "Command failed"),
            Severity::Config | Severity::Failure => tracing::error!(error = %self, "Command failed"),
        }
    }
}

/// Attach a description of the failed step to foreign errors.
pub trait CliContext<T> {
    fn cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> CliContext<T> for Result<T, io::Error> {
    fn cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::Io {
            context: f().into(),
            source,
        })
    }
}

impl<T> CliContext<T> for Result<T, CoreError> {
    /// Core errors already name the file or key; the step is only logged.
    fn cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| {
            tracing::debug!(step = %f().into(), "{e}");
            CliError::Core(e)
        })
    }
}
