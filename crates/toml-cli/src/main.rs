//! # toml
//!
//! Query and edit TOML files from the command line, and generate the
//! Homebrew formula that ships a release.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                               |
//! |------|---------------------------------------|
//! |  0   | Success                               |
//! |  1   | Internal error, or `check` said false |
//! |  2   | User / input error                    |
//! |  3   | File or key not found                 |
//! |  4   | Configuration error                   |

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init. A missing
    // .env is fine.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap picks the stream: stdout for --help/--version, stderr
            // for usage errors.
            if let Err(io_err) = e.print() {
                eprintln!("toml: could not print usage: {io_err}");
                return ExitCode::FAILURE;
            }
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e:#}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            let err = CliError::Config {
                message: format!("{e:#}"),
                source: None,
            };
            let color = !cli.global.no_color && std::io::stderr().is_terminal();
            return handle_error(err, cli.global.verbose > 0, color);
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;
    let color = output.supports_color() && std::io::stderr().is_terminal();

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, config, output) {
        Ok(code) => {
            debug!("toml completed");
            code
        }
        Err(e) => handle_error(e, verbose, color),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<ExitCode> {
    let done = |result: CliResult<()>| result.map(|()| ExitCode::SUCCESS);

    match cli.command {
        Commands::Check(args) => commands::check::execute(args, output),
        Commands::Get(args) => done(commands::get::execute(args, output)),
        Commands::Set(args) => done(commands::set::execute(args, config, output)),
        Commands::Formula(args) => done(commands::formula::execute(args, config, output)),
        Commands::Completions(args) => done(commands::completions::execute(args)),
        Commands::Config(cmd) => done(commands::config::execute(cmd, config, output)),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes.
fn handle_error(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();

    // Straight to stderr so the message shows even when stdout is redirected.
    eprint!("{}", err.render(verbose, color));

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
