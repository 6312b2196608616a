//! Logger setup.
//!
//! Logs go to stderr so stdout carries only the report.

use crate::config::ReportConfig;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;
use std::error::Error;

const STDERR_APPENDER: &str = "stderr";
const STDERR_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l:<5})} {t} - {m}{n}";

/// Build the stderr console configuration at the configured level.
pub fn console_config(config: &ReportConfig) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();

    let log_config = Config::builder()
        .appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)))
        .build(
            Root::builder()
                .appender(STDERR_APPENDER)
                .build(config.log_level),
        )?;
    Ok(log_config)
}

/// Install the logger for this process run.
///
/// Uses the log4rs YAML file when it exists, otherwise [`console_config`].
/// The returned handle must be held until the run ends.
pub fn init(config: &ReportConfig) -> Result<Option<Handle>, Box<dyn Error>> {
    let handle = if config.log_config_file.exists() {
        log4rs::init_file(&config.log_config_file, Default::default())?;
        log::info!(
            "Using log config file: {}",
            config.log_config_file.display()
        );
        None
    } else {
        Some(log4rs::init_config(console_config(config)?)?)
    };

    if let Some(level) = &config.invalid_log_level {
        log::warn!(
            "Ignoring invalid log level '{level}', using {}",
            config.log_level
        );
    }
    Ok(handle)
}
