use std::collections::HashMap;
use log::debug;
use crate::errors::RegistryError;
use crate::models::command_payload::CommandPayload;
use crate::models::field_definition::FieldDefinition;

/// Builds the write payload of a controllable field.
///
/// Every placeholder of the field's command template must be given a value, and each
/// value must lie within the placeholder's domain. Nothing is returned unless all
/// placeholders pass.
///
/// # Arguments
///
/// * 'field' - the field to build a payload for
/// * 'values' - values keyed by placeholder key
pub fn build_command_payload(field: &FieldDefinition, values: &HashMap<&str, i64>) -> Result<CommandPayload, RegistryError> {
    let template = field.command
        .ok_or_else(|| RegistryError::NotCommandable { field: field.key.to_string() })?;

    let mut entries: Vec<(&'static str, i64)> = Vec::with_capacity(template.placeholders().len());
    for placeholder in template.placeholders() {
        let value = *values.get(placeholder.key)
            .ok_or_else(|| RegistryError::MissingValue {
                field: field.key.to_string(),
                placeholder: placeholder.key.to_string(),
            })?;

        if let Some(domain) = placeholder.domain {
            if !domain.check(value) {
                return Err(RegistryError::ValueOutOfDomain {
                    placeholder: placeholder.key.to_string(),
                    value,
                    domain: domain.to_string(),
                });
            }
        }

        entries.push((placeholder.key, value));
    }

    debug!("built command payload for {} with {} entries", field.key, entries.len());

    Ok(CommandPayload::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::river3;
    use crate::registry::Registry;

    fn field(key: &str) -> &'static FieldDefinition {
        Registry::builtin().unwrap().get_field(river3::MODEL, key).unwrap()
    }

    #[test]
    fn max_charge_level_in_range() {
        let payload = build_command_payload(field("cms_max_chg_soc"), &HashMap::from([("cms_max_chg_soc", 75)])).unwrap();
        assert_eq!(payload.to_json().unwrap(), r#"{"cms_max_chg_soc":75}"#);
    }

    #[test]
    fn max_charge_level_below_range() {
        let result = build_command_payload(field("cms_max_chg_soc"), &HashMap::from([("cms_max_chg_soc", 40)]));
        assert_eq!(result.unwrap_err(), RegistryError::ValueOutOfDomain {
            placeholder: "cms_max_chg_soc".to_string(),
            value: 40,
            domain: "[50, 100]".to_string(),
        });
    }

    #[test]
    fn charging_power_off_step() {
        let power = field("plug_in_info_ac_in_chg_pow_max");
        let result = build_command_payload(power, &HashMap::from([("plug_in_info_ac_in_chg_pow_max", 60)]));
        assert_eq!(result.unwrap_err(), RegistryError::ValueOutOfDomain {
            placeholder: "plug_in_info_ac_in_chg_pow_max".to_string(),
            value: 60,
            domain: "[50, 305] step 50".to_string(),
        });
        let payload = build_command_payload(power, &HashMap::from([("plug_in_info_ac_in_chg_pow_max", 250)])).unwrap();
        assert_eq!(payload.get("plug_in_info_ac_in_chg_pow_max"), Some(250));
    }

    #[test]
    fn backup_reserve_enabled() {
        let values = HashMap::from([("energy_backup_en", 1), ("energy_backup_start_soc", 20)]);
        let payload = build_command_payload(field("energy_backup_en"), &values).unwrap();
        assert_eq!(payload.entries(), &[("energy_backup_en", 1), ("energy_backup_start_soc", 20)]);
        assert_eq!(payload.to_json().unwrap(), r#"{"energy_backup_en":1,"energy_backup_start_soc":20}"#);
    }

    #[test]
    fn backup_reserve_without_level() {
        let result = build_command_payload(field("energy_backup_en"), &HashMap::from([("energy_backup_en", 1)]));
        assert_eq!(result.unwrap_err(), RegistryError::MissingValue {
            field: "energy_backup_en".to_string(),
            placeholder: "energy_backup_start_soc".to_string(),
        });
    }

    #[test]
    fn backup_reserve_level_is_checked_on_switch() {
        let values = HashMap::from([("energy_backup_en", 1), ("energy_backup_start_soc", 2)]);
        let result = build_command_payload(field("energy_backup_en"), &values);
        assert!(matches!(result, Err(RegistryError::ValueOutOfDomain { .. })));
    }

    #[test]
    fn switch_accepts_only_on_off() {
        let beeper = field("en_beep");
        assert!(build_command_payload(beeper, &HashMap::from([("en_beep", 0)])).is_ok());
        assert!(build_command_payload(beeper, &HashMap::from([("en_beep", 1)])).is_ok());
        assert!(build_command_payload(beeper, &HashMap::from([("en_beep", 2)])).is_err());
    }

    #[test]
    fn select_codes() {
        let dc_mode = field("pv_chg_type");
        let payload = build_command_payload(dc_mode, &HashMap::from([("pv_chg_type", 2)])).unwrap();
        assert_eq!(payload.get("pv_chg_type"), Some(2));
        assert!(build_command_payload(dc_mode, &HashMap::from([("pv_chg_type", 3)])).is_err());
    }

    #[test]
    fn extra_values_are_ignored() {
        let values = HashMap::from([("cms_min_dsg_soc", 10), ("cms_max_chg_soc", 90)]);
        let payload = build_command_payload(field("cms_min_dsg_soc"), &values).unwrap();
        assert_eq!(payload.len(), 1);
    }

    #[test]
    fn sensors_have_no_payload() {
        let result = build_command_payload(field("bms_batt_soc"), &HashMap::from([("bms_batt_soc", 50)]));
        assert_eq!(result.unwrap_err(), RegistryError::NotCommandable { field: "bms_batt_soc".to_string() });
    }
}
