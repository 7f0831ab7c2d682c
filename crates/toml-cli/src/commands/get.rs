//! `toml get`: print the item at a query.

use tracing::instrument;

use toml_cli_adapters::LocalFilesystem;
use toml_cli_core::application::{DocumentService, GetFormat};

use crate::{
    cli::GetArgs,
    error::{CliResult, CliContext},
    output::OutputManager,
};

#[instrument(skip_all, fields(path = %args.path.display(), query = %args.query))]
pub fn execute(args: GetArgs, output: OutputManager) -> CliResult<()> {
    let format = get_format(&args);
    let service = DocumentService::new(Box::new(LocalFilesystem::new()));
    let text = service
        .get(&args.path, &args.query, format)
        .cli_context(|| format!("reading '{}'", args.query))?;

    // Fragments already end with a newline.
    match format {
        GetFormat::Toml => output.data(&text)?,
        GetFormat::Json | GetFormat::Raw => output.data_line(&text)?,
    }
    Ok(())
}

fn get_format(args: &GetArgs) -> GetFormat {
    if args.output_toml {
        GetFormat::Toml
    } else if args.raw {
        GetFormat::Raw
    } else {
        GetFormat::Json
    }
}
