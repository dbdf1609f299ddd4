use thiserror::Error;

/// Errors raised by registry lookups and command payload construction
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown device model: {0}")]
    UnknownDeviceModel(String),
    #[error("unknown field '{key}' for device model {model}")]
    UnknownField { model: String, key: String },
    #[error("field '{field}' has no command template")]
    NotCommandable { field: String },
    #[error("missing value for '{placeholder}' in command for field '{field}'")]
    MissingValue { field: String, placeholder: String },
    #[error("value {value} for '{placeholder}' is outside of domain {domain}")]
    ValueOutOfDomain { placeholder: String, value: i64, domain: String },
    #[error("invalid device profile {model}: {reason}")]
    InvalidProfile { model: String, reason: String },
}

#[derive(Error, Debug)]
#[error("error loading configuration: {0}")]
pub struct ConfigError(pub String);
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError(format!("io error: {}", e)) }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self { ConfigError(format!("toml document error: {}", e)) }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self { ConfigError(e.to_string()) }
}

#[derive(Error, Debug)]
#[error("error setting up logging: {0}")]
pub struct LoggingError(pub String);
impl From<std::io::Error> for LoggingError {
    fn from(e: std::io::Error) -> Self { LoggingError(format!("log file error: {}", e)) }
}
impl From<log4rs::config::runtime::ConfigErrors> for LoggingError {
    fn from(e: log4rs::config::runtime::ConfigErrors) -> Self { LoggingError(e.to_string()) }
}
impl From<log::SetLoggerError> for LoggingError {
    fn from(e: log::SetLoggerError) -> Self { LoggingError(e.to_string()) }
}
