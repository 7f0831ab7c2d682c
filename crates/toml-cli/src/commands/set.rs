//! `toml set`: store a value at a query.
//!
//! Without `--overwrite` the edited document is printed and the file is left
//! alone. With it, the file is rewritten and nothing is printed.

use tracing::{debug, instrument};

use toml_cli_adapters::LocalFilesystem;
use toml_cli_core::application::{DocumentService, SetOptions};

use crate::{cli::SetArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(path = %args.path.display(), query = %args.query))]
pub fn execute(args: SetArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let options = set_options(&args, &config);
    debug!(?options, "Setting value");

    let service = DocumentService::new(Box::new(LocalFilesystem::new()));
    if let Some(document) = service.set(&args.path, &args.query, &args.value, options)? {
        output.data(&document)?;
    }
    Ok(())
}

fn set_options(args: &SetArgs, config: &AppConfig) -> SetOptions {
    SetOptions {
        overwrite: args.overwrite,
        backup: args.backup || config.edit.backup,
        kind: args.value_type.into(),
    }
}
