//! Field registry for portable power stations.
//!
//! Each supported device model has a static table of field definitions: sensors,
//! switches, sliders and selects with their labels, units, value domains and command
//! templates. The registry looks fields up by key and builds validated write payloads
//! that a transport can hand to the device unchanged.

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod payload;
pub mod profiles;
pub mod registry;

pub use errors::RegistryError;
pub use models::command_payload::CommandPayload;
pub use models::domain::{Domain, EnumOption};
pub use models::field_definition::{Category, CommandTemplate, DeviceProfile, FieldDefinition, Placeholder, Unit};
pub use payload::build_command_payload;
pub use registry::Registry;
