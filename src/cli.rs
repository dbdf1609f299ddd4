use std::collections::HashMap;
use std::io::Write;
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use crate::models::field_definition::FieldDefinition;
use crate::payload::build_command_payload;
use crate::registry::Registry;

#[derive(Parser, Debug)]
#[command(name = "flowfields", version, about = "Field registry and command payloads for portable power stations")]
pub struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Device model, overrides the model from the configuration file
    #[arg(short, long)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List known device models
    Models,
    /// List the fields of the device model
    List {
        /// Only show enabled fields
        #[arg(long)]
        enabled: bool,
    },
    /// Show one field as JSON
    Get {
        key: String,
    },
    /// Build a command payload, values are given as name=value
    Payload {
        key: String,
        values: Vec<String>,
    },
}

/// Parses name=value pairs into placeholder values. A value is either an integer or,
/// when the placeholder has an enumeration domain, one of its option labels.
///
/// # Arguments
///
/// * 'field' - the field the values are meant for
/// * 'pairs' - raw name=value arguments
pub fn parse_values(field: &FieldDefinition, pairs: &[String]) -> Result<HashMap<String, i64>> {
    let placeholders = field.command.map(|c| c.placeholders()).unwrap_or_default();
    let mut values: HashMap<String, i64> = HashMap::new();

    for pair in pairs {
        let (name, raw) = pair.split_once('=')
            .ok_or_else(|| anyhow!("expected name=value, got '{}'", pair))?;
        let name = name.trim();

        let value = match raw.trim().parse::<i64>() {
            Ok(v) => v,
            Err(_) => placeholders.iter()
                .find(|p| p.key == name)
                .and_then(|p| p.domain)
                .and_then(|d| d.code_for(raw))
                .ok_or_else(|| anyhow!("'{}' is neither a number nor an option of {}", raw, name))?,
        };

        values.insert(name.to_string(), value);
    }

    Ok(values)
}

/// Executes one command against the registry and writes the result to the given output
///
/// # Arguments
///
/// * 'command' - the command to run
/// * 'registry' - the field registry
/// * 'model' - device model to work on
/// * 'out' - where to write the result
pub fn run(command: &Command, registry: &Registry, model: &str, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Models => {
            for model in registry.device_models() {
                let profile = registry.profile(model)?;
                writeln!(out, "{:<12} {}", profile.model, profile.name)?;
            }
        }
        Command::List { enabled } => {
            let fields: Vec<&FieldDefinition> = if *enabled {
                registry.list_enabled_fields(model)?
            } else {
                registry.list_fields(model)?.iter().collect()
            };
            for field in fields {
                writeln!(out, "{}", field)?;
            }
        }
        Command::Get { key } => {
            let field = registry.get_field(model, key)?;
            writeln!(out, "{}", serde_json::to_string_pretty(field)?)?;
        }
        Command::Payload { key, values } => {
            let field = registry.get_field(model, key)?;
            let parsed = parse_values(field, values)
                .with_context(|| format!("invalid values for {}", key))?;
            let borrowed = parsed.iter()
                .map(|(k, v)| (k.as_str(), *v))
                .collect::<HashMap<&str, i64>>();

            let payload = build_command_payload(field, &borrowed)?;
            writeln!(out, "{}", payload.to_json()?)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RegistryError;
    use crate::profiles::river3;

    fn run_to_string(command: Command) -> Result<String> {
        let registry = Registry::builtin()?;
        let mut out: Vec<u8> = Vec::new();
        run(&command, &registry, river3::MODEL, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_payload_command() {
        let args = Args::try_parse_from(["flowfields", "-m", "RIVER_3", "payload", "cms_max_chg_soc", "cms_max_chg_soc=75"]).unwrap();
        assert_eq!(args.config, "config.toml");
        assert_eq!(args.model.as_deref(), Some("RIVER_3"));
        assert_eq!(args.command, Command::Payload {
            key: "cms_max_chg_soc".to_string(),
            values: strings(&["cms_max_chg_soc=75"]),
        });
    }

    #[test]
    fn parses_list_flag() {
        let args = Args::try_parse_from(["flowfields", "list", "--enabled"]).unwrap();
        assert_eq!(args.command, Command::List { enabled: true });
    }

    #[test]
    fn option_labels_become_codes() {
        let registry = Registry::builtin().unwrap();
        let field = registry.get_field(river3::MODEL, "screen_off_time").unwrap();
        let values = parse_values(field, &strings(&["screen_off_time=5 min"])).unwrap();
        assert_eq!(values.get("screen_off_time"), Some(&300));
    }

    #[test]
    fn malformed_pair_is_rejected() {
        let registry = Registry::builtin().unwrap();
        let field = registry.get_field(river3::MODEL, "cms_max_chg_soc").unwrap();
        assert!(parse_values(field, &strings(&["cms_max_chg_soc"])).is_err());
        assert!(parse_values(field, &strings(&["cms_max_chg_soc=high"])).is_err());
    }

    #[test]
    fn payload_is_printed_as_json() {
        let output = run_to_string(Command::Payload {
            key: "energy_backup_en".to_string(),
            values: strings(&["energy_backup_en=1", "energy_backup_start_soc=20"]),
        }).unwrap();
        assert_eq!(output.trim(), r#"{"energy_backup_en":1,"energy_backup_start_soc":20}"#);
    }

    #[test]
    fn payload_errors_keep_their_kind() {
        let err = run_to_string(Command::Payload {
            key: "cms_max_chg_soc".to_string(),
            values: strings(&["cms_max_chg_soc=40"]),
        }).unwrap_err();
        assert!(matches!(err.downcast_ref::<RegistryError>(), Some(RegistryError::ValueOutOfDomain { .. })));
    }

    #[test]
    fn list_marks_disabled_fields() {
        let all = run_to_string(Command::List { enabled: false }).unwrap();
        let enabled = run_to_string(Command::List { enabled: true }).unwrap();
        assert!(all.contains("bms_batt_vol"));
        assert!(all.contains("(disabled)"));
        assert!(!enabled.contains("bms_batt_vol"));
    }

    #[test]
    fn get_prints_field_json() {
        let output = run_to_string(Command::Get { key: "pow_in_sum_w".to_string() }).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["label"], "Total In Power");
        assert_eq!(json["energy_twin_key"], "pow_in_sum_energy");
    }

    #[test]
    fn models_lists_builtin_profiles() {
        let output = run_to_string(Command::Models).unwrap();
        assert!(output.starts_with("RIVER_3"));
        assert!(output.contains("River 3"));
    }
}
