use std::fmt;
use serde::Serialize;
use crate::models::domain::Domain;

/// Available field categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Sensor,
    Switch,
    Slider,
    Select,
    Status,
}

impl Category {
    /// True for categories that accept writes
    pub fn is_controllable(&self) -> bool {
        matches!(self, Category::Switch | Category::Slider | Category::Select)
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Category::Sensor => write!(f, "Sensor"),
            Category::Switch => write!(f, "Switch"),
            Category::Slider => write!(f, "Slider"),
            Category::Select => write!(f, "Select"),
            Category::Status => write!(f, "Status"),
        }
    }
}

/// Measurement unit of a sensor value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    Percent,
    Watt,
    Volt,
    MilliVolt,
    MilliAmp,
    MilliAmpHour,
    Celsius,
    Minutes,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Unit::Percent      => write!(f, "%"),
            Unit::Watt         => write!(f, "W"),
            Unit::Volt         => write!(f, "V"),
            Unit::MilliVolt    => write!(f, "mV"),
            Unit::MilliAmp     => write!(f, "mA"),
            Unit::MilliAmpHour => write!(f, "mAh"),
            Unit::Celsius      => write!(f, "°C"),
            Unit::Minutes      => write!(f, "min"),
        }
    }
}

/// One slot in a command payload. The key is both the payload key and the name
/// under which the caller supplies the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub key: &'static str,
    pub domain: Option<Domain>,
}

/// Ordered placeholders making up a write payload, the first one is the primary value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommandTemplate(pub &'static [Placeholder]);

impl CommandTemplate {
    pub fn placeholders(&self) -> &'static [Placeholder] {
        self.0
    }

    pub fn primary(&self) -> Option<&'static Placeholder> {
        self.0.first()
    }
}

/// Presentation metadata and write shape of one device field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub category: Category,
    pub enabled: bool,
    pub unit: Option<Unit>,
    pub energy_twin_key: Option<&'static str>,
    /// Keys of secondary fields shown alongside this one, lookup only
    pub attributes: &'static [&'static str],
    /// Readings are shown as magnitudes, the device reports some outputs as negative
    pub absolute: bool,
    pub command: Option<CommandTemplate>,
    pub domain: Option<Domain>,
}

impl FieldDefinition {
    /// Returns the display label for a raw enumeration code, if the field has one
    ///
    /// # Arguments
    ///
    /// * 'code' - raw value as reported by the device
    pub fn display_value(&self, code: i64) -> Option<&'static str> {
        self.domain.and_then(|d| d.label_for(code))
    }

    /// Returns the reading as it should be presented
    ///
    /// # Arguments
    ///
    /// * 'raw' - raw value as reported by the device
    pub fn reading(&self, raw: i64) -> i64 {
        if self.absolute { raw.abs() } else { raw }
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for FieldDefinition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:<6} {:<32} {:<28}", self.category.to_string(), self.key, self.label)?;
        if let Some(unit) = self.unit {
            write!(f, " {}", unit)?;
        }
        if let Some(domain) = self.domain {
            write!(f, " {}", domain)?;
        }
        if !self.enabled {
            write!(f, " (disabled)")?;
        }

        Ok(())
    }
}

/// The field table of one supported device model
#[derive(Debug, Clone, Copy)]
pub struct DeviceProfile {
    pub model: &'static str,
    pub name: &'static str,
    pub fields: &'static [FieldDefinition],
}
