use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;
use crate::config::General;
use crate::errors::LoggingError;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l:<5} {t} - {m}{n}";

/// Builds the log4rs configuration from the general configuration section.
/// Console output goes to stderr so it never mixes with command output.
///
/// # Arguments
///
/// * 'general' - the general configuration section
pub fn build_log_config(general: &General) -> Result<Config, LoggingError> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(&general.log_path)?;

    let mut builder = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if general.log_to_stdout {
        let console = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("console", Box::new(console)));
        root = root.appender("console");
    }

    Ok(builder.build(root.build(general.log_level))?)
}

/// Initializes the global logger
///
/// # Arguments
///
/// * 'general' - the general configuration section
pub fn init_logging(general: &General) -> Result<Handle, LoggingError> {
    let config = build_log_config(general)?;

    Ok(log4rs::init_config(config)?)
}
