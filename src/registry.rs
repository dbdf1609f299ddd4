use std::collections::{HashMap, HashSet};
use log::{debug, warn};
use crate::errors::RegistryError;
use crate::models::field_definition::{Category, DeviceProfile, FieldDefinition};
use crate::profiles::BUILTIN;

struct IndexedProfile {
    profile: DeviceProfile,
    keys: HashMap<&'static str, usize>,
}

/// Immutable lookup of field tables per device model.
///
/// Holds only references to static tables plus owned indices, so one instance can be
/// shared freely between threads once constructed.
pub struct Registry {
    profiles: Vec<IndexedProfile>,
    models: HashMap<&'static str, usize>,
}

impl Registry {
    /// Returns a registry over the given profiles after checking each of them
    ///
    /// # Arguments
    ///
    /// * 'profiles' - device profiles, model identifiers must be unique
    pub fn new(profiles: &[DeviceProfile]) -> Result<Self, RegistryError> {
        let mut registry = Registry { profiles: Vec::new(), models: HashMap::new() };

        for profile in profiles {
            validate_profile(profile).inspect_err(|e| warn!("{}", e))?;

            if registry.models.contains_key(profile.model) {
                return Err(RegistryError::InvalidProfile {
                    model: profile.model.to_string(),
                    reason: "device model registered twice".to_string(),
                });
            }

            let keys = profile.fields.iter()
                .enumerate()
                .map(|(i, f)| (f.key, i))
                .collect::<HashMap<&'static str, usize>>();

            registry.models.insert(profile.model, registry.profiles.len());
            registry.profiles.push(IndexedProfile { profile: *profile, keys });
            debug!("registered device model {} with {} fields", profile.model, profile.fields.len());
        }

        Ok(registry)
    }

    /// Returns a registry over all profiles shipped with the crate
    pub fn builtin() -> Result<Self, RegistryError> {
        Registry::new(BUILTIN)
    }

    /// Model identifiers in registration order
    pub fn device_models(&self) -> Vec<&'static str> {
        self.profiles.iter().map(|p| p.profile.model).collect()
    }

    /// Returns the profile for a device model
    ///
    /// # Arguments
    ///
    /// * 'device_model' - model identifier, e.g. "RIVER_3"
    pub fn profile(&self, device_model: &str) -> Result<&DeviceProfile, RegistryError> {
        self.indexed(device_model).map(|p| &p.profile)
    }

    /// Returns all fields of a device model, enabled and disabled, in authoring order
    ///
    /// # Arguments
    ///
    /// * 'device_model' - model identifier, e.g. "RIVER_3"
    pub fn list_fields(&self, device_model: &str) -> Result<&'static [FieldDefinition], RegistryError> {
        self.indexed(device_model).map(|p| p.profile.fields)
    }

    /// Returns only the enabled fields of a device model, in authoring order
    ///
    /// # Arguments
    ///
    /// * 'device_model' - model identifier, e.g. "RIVER_3"
    pub fn list_enabled_fields(&self, device_model: &str) -> Result<Vec<&'static FieldDefinition>, RegistryError> {
        let fields = self.list_fields(device_model)?;

        Ok(fields.iter().filter(|f| f.enabled).collect())
    }

    /// Looks up one field of a device model by key
    ///
    /// # Arguments
    ///
    /// * 'device_model' - model identifier, e.g. "RIVER_3"
    /// * 'key' - field key, e.g. "cms_max_chg_soc"
    pub fn get_field(&self, device_model: &str, key: &str) -> Result<&'static FieldDefinition, RegistryError> {
        let indexed = self.indexed(device_model)?;
        let fields: &'static [FieldDefinition] = indexed.profile.fields;

        indexed.keys.get(key)
            .map(|&i| &fields[i])
            .ok_or_else(|| RegistryError::UnknownField {
                model: device_model.to_string(),
                key: key.to_string(),
            })
    }

    fn indexed(&self, device_model: &str) -> Result<&IndexedProfile, RegistryError> {
        self.models.get(device_model)
            .map(|&i| &self.profiles[i])
            .ok_or_else(|| RegistryError::UnknownDeviceModel(device_model.to_string()))
    }
}

/// Checks the table invariants of a device profile
///
/// # Arguments
///
/// * 'profile' - the profile to check
fn validate_profile(profile: &DeviceProfile) -> Result<(), RegistryError> {
    let invalid = |reason: String| RegistryError::InvalidProfile { model: profile.model.to_string(), reason };

    let mut seen: HashSet<&str> = HashSet::new();
    for field in profile.fields {
        if !seen.insert(field.key) {
            return Err(invalid(format!("duplicate field key '{}'", field.key)));
        }

        if let Some(domain) = field.domain {
            if domain.is_empty() {
                return Err(invalid(format!("field '{}' has an empty domain", field.key)));
            }
            if let Some(code) = domain.duplicate_code() {
                return Err(invalid(format!("field '{}' repeats option code {}", field.key, code)));
            }
        }

        match field.category {
            Category::Sensor | Category::Status => {
                if field.command.is_some() {
                    return Err(invalid(format!("read only field '{}' has a command template", field.key)));
                }
            }
            Category::Switch | Category::Slider | Category::Select => {
                let primary = field.command
                    .and_then(|c| c.primary())
                    .ok_or_else(|| invalid(format!("field '{}' has no command template", field.key)))?;

                if field.category != Category::Switch && field.domain.is_none() {
                    return Err(invalid(format!("field '{}' has no domain", field.key)));
                }
                if primary.domain != field.domain {
                    return Err(invalid(format!("primary placeholder of '{}' does not share the field domain", field.key)));
                }
            }
        }

        if let Some(command) = field.command {
            let mut slots: HashSet<&str> = HashSet::new();
            for placeholder in command.placeholders() {
                if !slots.insert(placeholder.key) {
                    return Err(invalid(format!("placeholder '{}' repeated in '{}'", placeholder.key, field.key)));
                }
                if placeholder.domain.is_some_and(|d| d.is_empty()) {
                    return Err(invalid(format!("placeholder '{}' has an empty domain", placeholder.key)));
                }
                if let Some(code) = placeholder.domain.and_then(|d| d.duplicate_code()) {
                    return Err(invalid(format!("placeholder '{}' repeats option code {}", placeholder.key, code)));
                }
            }
        }
    }

    // Attributes may point forward in the table, so check them once all keys are known
    for field in profile.fields {
        if let Some(missing) = field.attributes.iter().find(|a| !seen.contains(**a)) {
            return Err(invalid(format!("attribute '{}' of '{}' is not a field", missing, field.key)));
        }
    }

    Ok(())
}
