use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A validated write payload, serialises to a flat JSON object in placeholder order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPayload {
    entries: Vec<(&'static str, i64)>,
}

impl CommandPayload {
    pub(crate) fn new(entries: Vec<(&'static str, i64)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    pub fn entries(&self) -> &[(&'static str, i64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Serialize for CommandPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_in_template_order() {
        let payload = CommandPayload::new(vec![("energy_backup_en", 1), ("energy_backup_start_soc", 20)]);
        assert_eq!(payload.to_json().unwrap(), r#"{"energy_backup_en":1,"energy_backup_start_soc":20}"#);
        assert_eq!(payload.get("energy_backup_start_soc"), Some(20));
        assert_eq!(payload.get("cms_max_chg_soc"), None);
        assert_eq!(payload.len(), 2);
        assert!(!payload.is_empty());
    }

    #[test]
    fn empty_payload_serialises_to_empty_object() {
        let payload = CommandPayload::new(Vec::new());
        assert!(payload.is_empty());
        assert_eq!(payload.to_json().unwrap(), "{}");
    }
}
