//! `toml config`: inspect configuration values.
//!
//! `get` takes the same queries as `toml get`, applied to the effective
//! configuration.

use toml_cli_core::domain::{JsonItem, Query, TomlDocument};

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data_line(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.data(&serialise(&config)?)?;
        }

        ConfigCommands::Path => {
            output.data_line(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn serialise(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::Config {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Strings come back bare; tables and other values as JSON.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let doc = TomlDocument::parse(&serialise(config)?)?;
    let query = Query::parse(key)?;
    let item = doc.lookup(&query)?;

    match item.as_str() {
        Some(s) => Ok(s.to_string()),
        None => serde_json::to_string(&JsonItem(item)).map_err(|e| CliError::Encoding {
            what: format!("config value '{key}'"),
            source: Box::new(e),
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "formula.output_dir").unwrap(), "Formula");
        assert_eq!(get_config_value(&cfg, "output.format").unwrap(), "auto");
    }

    #[test]
    fn get_non_string_as_json() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "edit.backup").unwrap(), "false");
        assert_eq!(get_config_value(&cfg, "edit").unwrap(), r#"{"backup":false}"#);
    }

    #[test]
    fn get_unset_optional_is_not_found() {
        let err = get_config_value(&AppConfig::default(), "formula.site").unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn get_bad_query_is_user_error() {
        let err = get_config_value(&AppConfig::default(), "formula..site").unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
