//! `toml formula`: generate a Homebrew formula.
//!
//! Field sources, highest priority first: flags, the `--vars` file, then the
//! `[formula]` config section.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use toml_cli_adapters::{FieldsLoader, LocalFilesystem, TemplateLoader};
use toml_cli_core::{
    application::{FormulaService, ports::Filesystem},
    domain::{Field, FormulaFields, FormulaRecord},
};

use crate::{
    cli::{FormulaArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: FormulaArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let fs = LocalFilesystem::new();
    let fields = collect_fields(&args, &config, &fs)?;
    debug!(count = fields.len(), "Formula fields collected");

    let template = args
        .template
        .as_deref()
        .or(config.formula.template.as_deref());
    let renderer = TemplateLoader::new(&fs).renderer(template)?;
    let service = FormulaService::new(Box::new(renderer), Box::new(fs));

    let destination = match (&args.output, args.write) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(default_destination(&config, &service.resolve(&fields)?)),
        (None, false) => None,
    };

    let json = output.format() == OutputFormat::Json;
    match destination {
        Some(path) => {
            let record = service.write(&fields, &path, args.force)?;
            info!(path = %path.display(), "Formula written");
            if json {
                output.data_line(&record_json(&record)?)?;
            } else {
                output.success(&format!(
                    "Wrote {} {} to {}",
                    record.name(),
                    record.version(),
                    path.display()
                ))?;
            }
        }
        None if json => {
            let record = service.resolve(&fields)?;
            output.data_line(&record_json(&record)?)?;
        }
        None => {
            let (_, text) = service.generate(&fields)?;
            output.data(&text)?;
        }
    }

    Ok(())
}

/// Layer config, the fields file and flags into one set of fields.
fn collect_fields(
    args: &FormulaArgs,
    config: &AppConfig,
    fs: &dyn Filesystem,
) -> CliResult<FormulaFields> {
    let mut from_config = FormulaFields::new();
    if let Some(site) = &config.formula.site {
        from_config.set(Field::Site, site.clone());
    }
    if let Some(repo) = &config.formula.repo {
        from_config.set(Field::Repo, repo.clone());
    }

    let from_file = match &args.vars {
        Some(path) => FieldsLoader::new(fs).load(path)?,
        None => FormulaFields::new(),
    };

    Ok(from_config.merge(from_file).merge(args.flag_fields()))
}

fn record_json(record: &FormulaRecord) -> CliResult<String> {
    serde_json::to_string_pretty(record).map_err(|e| CliError::Encoding {
        what: "formula record as JSON".into(),
        source: Box::new(e),
    })
}

/// Where `--write` puts the formula for `record`.
fn default_destination(config: &AppConfig, record: &FormulaRecord) -> PathBuf {
    config.formula.output_dir.join(record.file_name())
}
