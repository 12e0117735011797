//! `sitewright config`, read and write configuration values.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.machine(&value)?;
        }

        ConfigCommands::Set { key, value } => {
            // Edit the file itself, not the merged in-memory view, so values
            // inherited from another file are not accidentally copied in.
            let path = AppConfig::active_path(global.config.as_ref());
            let mut on_disk = if path.is_file() {
                AppConfig::from_file(&path).map_err(config_error)?
            } else {
                AppConfig::default()
            };

            set_config_value(&mut on_disk, &key, &value)?;
            on_disk.save(&path).map_err(config_error)?;

            output.success(&format!("{key} = {value}  ({})", path.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            let path = AppConfig::active_path(global.config.as_ref());
            output.machine(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn config_error(e: anyhow::Error) -> CliError {
    CliError::ConfigError {
        message: format!("{e:#}"),
        source: None,
    }
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.industry" => Ok(config.defaults.industry.clone().unwrap_or_default()),
        "defaults.features" => Ok(config.defaults.features.join(",")),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(unknown_key(key)),
    }
}

fn set_config_value(config: &mut AppConfig, key: &str, value: &str) -> CliResult<()> {
    match key {
        "defaults.industry" => {
            config.defaults.industry = if value.trim().is_empty() {
                None
            } else {
                Some(value.trim().to_string())
            };
        }
        "defaults.features" => {
            config.defaults.features = value
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(String::from)
                .collect();
        }
        "output.no_color" => {
            config.output.no_color = value.parse().map_err(|_| CliError::ConfigError {
                message: format!("output.no_color expects true or false, got '{value}'"),
                source: None,
            })?;
        }
        "output.format" => {
            if !matches!(value, "auto" | "human" | "plain" | "json") {
                return Err(CliError::ConfigError {
                    message: format!(
                        "output.format must be auto, human, plain, or json, got '{value}'"
                    ),
                    source: None,
                });
            }
            config.output.format = value.to_string();
        }
        _ => return Err(unknown_key(key)),
    }
    Ok(())
}

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!(
            "Unknown config key: '{key}' (known: defaults.industry, defaults.features, \
             output.no_color, output.format)"
        ),
        source: None,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn get_known_keys() {
        let mut cfg = AppConfig::default();
        cfg.defaults.industry = Some("restaurant".into());
        cfg.defaults.features = vec!["gallery".into(), "booking".into()];

        assert_eq!(
            get_config_value(&cfg, "defaults.industry").unwrap(),
            "restaurant"
        );
        assert_eq!(
            get_config_value(&cfg, "defaults.features").unwrap(),
            "gallery,booking"
        );
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn set_industry_and_clear_it() {
        let mut cfg = AppConfig::default();
        set_config_value(&mut cfg, "defaults.industry", "legal").unwrap();
        assert_eq!(cfg.defaults.industry.as_deref(), Some("legal"));

        set_config_value(&mut cfg, "defaults.industry", "  ").unwrap();
        assert!(cfg.defaults.industry.is_none());
    }

    #[test]
    fn set_features_splits_on_commas() {
        let mut cfg = AppConfig::default();
        set_config_value(&mut cfg, "defaults.features", "auth, booking,,chat").unwrap();
        assert_eq!(cfg.defaults.features, vec!["auth", "booking", "chat"]);
    }

    #[test]
    fn set_no_color_rejects_non_booleans() {
        let mut cfg = AppConfig::default();
        assert!(set_config_value(&mut cfg, "output.no_color", "maybe").is_err());
        set_config_value(&mut cfg, "output.no_color", "true").unwrap();
        assert!(cfg.output.no_color);
    }

    #[test]
    fn set_format_validates_the_value() {
        let mut cfg = AppConfig::default();
        assert!(set_config_value(&mut cfg, "output.format", "yaml").is_err());
        set_config_value(&mut cfg, "output.format", "json").unwrap();
        assert_eq!(cfg.output.format, "json");
    }
}
