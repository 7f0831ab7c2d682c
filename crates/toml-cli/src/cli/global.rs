//! Flags accepted before or after any subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};
use tracing::level_filters::LevelFilter;

/// Logging, colour, config file and output format switches.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more: `-v` info, `-vv` debug, `-vvv` trace.
    ///
    /// Logs go to stderr and never mix with query results on stdout.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors and hide status lines.
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colours (also set by `NO_COLOR`).
    #[arg(long = "no-color", env = "NO_COLOR", global = true)]
    pub no_color: bool,

    /// Read settings from FILE instead of the per-user config file.
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// How status lines and formula records are printed.
    #[arg(
        long = "output-format",
        value_enum,
        default_value_t = OutputFormat::Auto,
        global = true
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Log level asked for on the command line. `--quiet` wins over `-v`.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Rendering of non-data output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Coloured status lines.
    Human,
    /// No colour, no decoration.
    Plain,
    /// Records as JSON (`formula`).
    Json,
}
