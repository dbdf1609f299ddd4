pub mod domain;
pub mod field_definition;
pub mod command_payload;
