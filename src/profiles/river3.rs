use crate::models::domain::{Domain, EnumOption};
use crate::models::field_definition::{Category, CommandTemplate, DeviceProfile, FieldDefinition, Placeholder, Unit};

pub const MODEL: &str = "RIVER_3";

const ON_OFF: Domain = Domain::Options(&[
    EnumOption { label: "Off", code: 0 },
    EnumOption { label: "On", code: 1 },
]);

const CHARGING_STATE: Domain = Domain::Options(&[
    EnumOption { label: "Unused", code: 0 },
    EnumOption { label: "Discharging", code: 1 },
    EnumOption { label: "Charging", code: 2 },
]);

const MAX_CHARGE_LEVEL: Domain = Domain::Range { min: 50, max: 100, step: 1 };
const MIN_DISCHARGE_LEVEL: Domain = Domain::Range { min: 0, max: 30, step: 1 };
const AC_CHARGING_POWER: Domain = Domain::Range { min: 50, max: 305, step: 50 };
const BACKUP_RESERVE_LEVEL: Domain = Domain::Range { min: 5, max: 100, step: 5 };

const DC_CHARGE_CURRENT: Domain = Domain::Options(&[
    EnumOption { label: "4A", code: 4 },
    EnumOption { label: "6A", code: 6 },
    EnumOption { label: "8A", code: 8 },
]);

const DC_MODE: Domain = Domain::Options(&[
    EnumOption { label: "Auto", code: 0 },
    EnumOption { label: "Solar Recharging", code: 1 },
    EnumOption { label: "Car Recharging", code: 2 },
]);

const SCREEN_TIMEOUT: Domain = Domain::Options(&[
    EnumOption { label: "Never", code: 0 },
    EnumOption { label: "10 sec", code: 10 },
    EnumOption { label: "30 sec", code: 30 },
    EnumOption { label: "1 min", code: 60 },
    EnumOption { label: "5 min", code: 300 },
    EnumOption { label: "30 min", code: 1800 },
]);

// Unit and AC standby share the same minute based options
const STANDBY_TIMEOUT: Domain = Domain::Options(&[
    EnumOption { label: "Never", code: 0 },
    EnumOption { label: "30 min", code: 30 },
    EnumOption { label: "1 hr", code: 60 },
    EnumOption { label: "2 hr", code: 120 },
    EnumOption { label: "4 hr", code: 240 },
    EnumOption { label: "6 hr", code: 360 },
    EnumOption { label: "12 hr", code: 720 },
    EnumOption { label: "24 hr", code: 1440 },
]);

const fn sensor(key: &'static str, label: &'static str, unit: Option<Unit>, enabled: bool) -> FieldDefinition {
    FieldDefinition {
        key,
        label,
        category: Category::Sensor,
        enabled,
        unit,
        energy_twin_key: None,
        attributes: &[],
        absolute: false,
        command: None,
        domain: None,
    }
}

const fn with_energy(field: FieldDefinition, twin: &'static str) -> FieldDefinition {
    FieldDefinition { energy_twin_key: Some(twin), ..field }
}

const fn with_attributes(field: FieldDefinition, attributes: &'static [&'static str]) -> FieldDefinition {
    FieldDefinition { attributes, ..field }
}

const fn absolute(field: FieldDefinition) -> FieldDefinition {
    FieldDefinition { absolute: true, ..field }
}

const fn control(key: &'static str, label: &'static str, category: Category, domain: Domain, placeholders: &'static [Placeholder]) -> FieldDefinition {
    FieldDefinition {
        key,
        label,
        category,
        enabled: true,
        unit: None,
        energy_twin_key: None,
        attributes: &[],
        absolute: false,
        command: Some(CommandTemplate(placeholders)),
        domain: Some(domain),
    }
}

const fn switch(key: &'static str, label: &'static str, placeholders: &'static [Placeholder]) -> FieldDefinition {
    control(key, label, Category::Switch, ON_OFF, placeholders)
}

const fn slider(key: &'static str, label: &'static str, domain: Domain, placeholders: &'static [Placeholder]) -> FieldDefinition {
    control(key, label, Category::Slider, domain, placeholders)
}

const fn select(key: &'static str, label: &'static str, domain: Domain, placeholders: &'static [Placeholder]) -> FieldDefinition {
    control(key, label, Category::Select, domain, placeholders)
}

// Expands to a literal so the surrounding slice is promoted to 'static
macro_rules! slot {
    ($key:literal, $domain:expr) => {
        Placeholder { key: $key, domain: Some($domain) }
    };
}

const FIELDS: &[FieldDefinition] = &[
    with_attributes(sensor("bms_batt_soc", "Main Battery Level", Some(Unit::Percent), true),
                    &["bms_design_cap", "bms_full_cap", "bms_remain_cap"]),
    sensor("bms_design_cap", "Main Design Capacity", Some(Unit::MilliAmpHour), false),
    sensor("bms_full_cap", "Main Full Capacity", Some(Unit::MilliAmpHour), false),
    sensor("bms_remain_cap", "Main Remain Capacity", Some(Unit::MilliAmpHour), false),
    sensor("bms_batt_soh", "State of Health", Some(Unit::Percent), true),
    sensor("cms_batt_soc", "Battery Level", Some(Unit::Percent), true),
    FieldDefinition { domain: Some(CHARGING_STATE), ..sensor("bms_chg_dsg_state", "Battery Charging State", None, true) },
    with_energy(sensor("pow_in_sum_w", "Total In Power", Some(Unit::Watt), true), "pow_in_sum_energy"),
    with_energy(sensor("pow_out_sum_w", "Total Out Power", Some(Unit::Watt), true), "pow_out_sum_energy"),
    sensor("plug_in_info_pv_amp", "Solar In Current", Some(Unit::MilliAmp), true),
    sensor("pow_get_ac_in", "AC In Power", Some(Unit::Watt), true),
    absolute(sensor("pow_get_ac_out", "AC Out Power", Some(Unit::Watt), true)),
    sensor("plug_in_info_ac_in_vol", "AC In Volts", Some(Unit::Volt), true),
    sensor("plug_in_info_ac_out_vol", "AC Out Volts", Some(Unit::Volt), true),
    sensor("pow_get_pv", "Solar In Power", Some(Unit::Watt), true),
    sensor("pow_get_12v", "DC Out Power", Some(Unit::Watt), true),
    absolute(sensor("pow_get_typec1", "Type-C (1) Out Power", Some(Unit::Watt), true)),
    absolute(sensor("pow_get_qcusb1", "USB QC (1) Out Power", Some(Unit::Watt), true)),
    absolute(sensor("pow_get_qcusb2", "USB QC (2) Out Power", Some(Unit::Watt), true)),
    sensor("bms_chg_rem_time", "Charge Remaining Time", Some(Unit::Minutes), true),
    sensor("bms_dsg_rem_time", "Discharge Remaining Time", Some(Unit::Minutes), true),
    sensor("cms_chg_rem_time", "Remaining Time", Some(Unit::Minutes), true),
    sensor("temp_pcs_dc", "PCS DC Temperature", Some(Unit::Celsius), true),
    sensor("temp_pcs_ac", "PCS AC Temperature", Some(Unit::Celsius), true),
    with_attributes(sensor("bms_min_cell_temp", "Battery Temperature", Some(Unit::Celsius), true),
                    &["bms_max_cell_temp"]),
    sensor("bms_max_cell_temp", "Max Cell Temperature", Some(Unit::Celsius), false),
    with_attributes(sensor("bms_batt_vol", "Battery Volts", Some(Unit::Volt), false),
                    &["bms_min_cell_vol", "bms_max_cell_vol"]),
    sensor("bms_min_cell_vol", "Min Cell Volts", Some(Unit::MilliVolt), false),
    sensor("bms_max_cell_vol", "Max Cell Volts", Some(Unit::MilliVolt), false),
    FieldDefinition { category: Category::Status, ..sensor("status", "Status", None, true) },

    slider("cms_max_chg_soc", "Max Charge Level", MAX_CHARGE_LEVEL,
           &[slot!("cms_max_chg_soc", MAX_CHARGE_LEVEL)]),
    slider("cms_min_dsg_soc", "Min Discharge Level", MIN_DISCHARGE_LEVEL,
           &[slot!("cms_min_dsg_soc", MIN_DISCHARGE_LEVEL)]),
    slider("plug_in_info_ac_in_chg_pow_max", "AC Charging Power", AC_CHARGING_POWER,
           &[slot!("plug_in_info_ac_in_chg_pow_max", AC_CHARGING_POWER)]),
    slider("energy_backup_start_soc", "Backup Reserve Level", BACKUP_RESERVE_LEVEL,
           &[slot!("energy_backup_start_soc", BACKUP_RESERVE_LEVEL)]),

    switch("en_beep", "Beeper", &[slot!("en_beep", ON_OFF)]),
    switch("cfg_ac_out_open", "AC Enabled", &[slot!("cfg_ac_out_open", ON_OFF)]),
    switch("xboost_en", "X-Boost Enabled", &[slot!("xboost_en", ON_OFF)]),
    switch("cfg_dc12v_out_open", "DC (12V) Enabled", &[slot!("cfg_dc12v_out_open", ON_OFF)]),
    switch("output_power_off_memory", "AC Always On", &[slot!("output_power_off_memory", ON_OFF)]),
    // The device only accepts the backup flag together with a reserve level
    switch("energy_backup_en", "Backup Reserve Enabled", &[
        slot!("energy_backup_en", ON_OFF),
        slot!("energy_backup_start_soc", BACKUP_RESERVE_LEVEL),
    ]),

    select("plug_in_info_pv_dc_amp_max", "DC (12V) Charge Current", DC_CHARGE_CURRENT,
           &[slot!("plug_in_info_pv_dc_amp_max", DC_CHARGE_CURRENT)]),
    select("pv_chg_type", "DC Mode", DC_MODE,
           &[slot!("pv_chg_type", DC_MODE)]),
    select("screen_off_time", "Screen Timeout", SCREEN_TIMEOUT,
           &[slot!("screen_off_time", SCREEN_TIMEOUT)]),
    select("dev_standby_time", "Unit Timeout", STANDBY_TIMEOUT,
           &[slot!("dev_standby_time", STANDBY_TIMEOUT)]),
    select("ac_standby_time", "AC Timeout", STANDBY_TIMEOUT,
           &[slot!("ac_standby_time", STANDBY_TIMEOUT)]),
];

pub const PROFILE: DeviceProfile = DeviceProfile {
    model: MODEL,
    name: "River 3",
    fields: FIELDS,
};
