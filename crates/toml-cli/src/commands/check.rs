//! `toml check`: does a key exist?
//!
//! Answers on stdout (`true`, exit 0) or stderr (`false`, exit 1). Every
//! failure, including an unreadable file or a bad query, is a `false`.

use std::process::ExitCode;

use tracing::{debug, instrument};

use toml_cli_adapters::LocalFilesystem;
use toml_cli_core::application::DocumentService;

use crate::{cli::CheckArgs, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(path = %args.path.display(), query = %args.query))]
pub fn execute(args: CheckArgs, output: OutputManager) -> CliResult<ExitCode> {
    let service = DocumentService::new(Box::new(LocalFilesystem::new()));

    let found = match service.check(&args.path, &args.query) {
        Ok(found) => found,
        Err(e) => {
            debug!(error = %e, "Check failed, answering false");
            false
        }
    };

    if found {
        output.data_line("true")?;
        Ok(ExitCode::SUCCESS)
    } else {
        output.data_err_line("false")?;
        Ok(ExitCode::FAILURE)
    }
}
