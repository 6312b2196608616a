//! Runtime settings read from the environment.
//!
//! AWS settings (`AWS_PROFILE`, `AWS_REGION`, credentials) are not handled
//! here; `aws-config` resolves them.

use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

/// Log level for the console logger when no log4rs file is present.
pub const LOG_LEVEL_VAR: &str = "VPC_SUMMARY_LOG_LEVEL";
/// Path of an optional log4rs YAML file.
pub const LOG_CONFIG_VAR: &str = "VPC_SUMMARY_LOG_CONFIG";

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub log_level: LevelFilter,
    pub log_config_file: PathBuf,
    /// Level text that failed to parse, reported once logging is up.
    pub invalid_log_level: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            log_level: DEFAULT_LOG_LEVEL,
            log_config_file: PathBuf::from(DEFAULT_LOG_CONFIG),
            invalid_log_level: None,
        }
    }
}

impl ReportConfig {
    /// Read settings from the process environment (after `.env` is loaded).
    pub fn from_env() -> ReportConfig {
        ReportConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> ReportConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ReportConfig::default();

        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            match LevelFilter::from_str(level.trim()) {
                Ok(level) => config.log_level = level,
                Err(_) => config.invalid_log_level = Some(level),
            }
        }
        if let Some(path) = lookup(LOG_CONFIG_VAR).filter(|p| !p.trim().is_empty()) {
            config.log_config_file = PathBuf::from(path.trim());
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ReportConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.log_config_file, PathBuf::from("log4rs.yml"));
    }

    #[test]
    fn test_overrides() {
        let config = ReportConfig::from_lookup(lookup(&[
            (LOG_LEVEL_VAR, "debug"),
            (LOG_CONFIG_VAR, "/etc/vpc-summary/log4rs.yml"),
        ]));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(
            config.log_config_file,
            PathBuf::from("/etc/vpc-summary/log4rs.yml")
        );
        assert!(config.invalid_log_level.is_none());
    }

    #[test]
    fn test_invalid_level_keeps_default() {
        let config = ReportConfig::from_lookup(lookup(&[(LOG_LEVEL_VAR, "loud")]));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.invalid_log_level.as_deref(), Some("loud"));
    }
}
