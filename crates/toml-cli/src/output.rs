//! Output management and formatting.
//!
//! Two kinds of output go to stdout: *data* (what a command was asked to
//! print, written verbatim and never suppressed) and *status lines* (`✓`,
//! headers), which `--quiet` silences.

use std::io::{self, IsTerminal, Write as _};

use clap::ValueEnum as _;
use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
    err_term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // The flag wins over the config file unless left at `auto`.
        let requested = if args.output_format == OutputFormat::Auto {
            OutputFormat::from_str(&config.output.format, true).unwrap_or(OutputFormat::Auto)
        } else {
            args.output_format
        };

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    // ── Data ──────────────────────────────────────────────────────────────

    /// Command result, written exactly as given. Not affected by `--quiet`.
    pub fn data(&self, text: &str) -> io::Result<()> {
        let mut term = &self.term;
        term.write_all(text.as_bytes())?;
        term.flush()
    }

    /// Command result followed by a newline.
    pub fn data_line(&self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    /// Result printed on stderr, e.g. a negative `check`.
    pub fn data_err_line(&self, text: &str) -> io::Result<()> {
        self.err_term.write_line(text)
    }

    // ── Status lines ──────────────────────────────────────────────────────

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
