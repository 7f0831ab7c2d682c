//! Tracing subscriber setup for the `toml` binary.
//!
//! Library crates only emit events; this is the one place a subscriber is
//! installed. Output goes to stderr. `RUST_LOG`, when set, replaces the
//! level derived from `-v` / `-q` (see [`GlobalArgs::log_level`]).

use std::io::IsTerminal as _;

use anyhow::Context as _;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Targets that get the command-line level. Everything else stays off.
const TARGETS: [&str; 3] = ["toml", "toml_cli_core", "toml_cli_adapters"];

/// Install the global subscriber. Errors if one is already set.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(args.log_level())?,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .without_time()
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("a tracing subscriber is already installed")
}

fn build_filter(level: LevelFilter) -> anyhow::Result<EnvFilter> {
    let directives = TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::try_new(&directives).with_context(|| format!("bad log filter '{directives}'"))
}
