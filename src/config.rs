use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::LevelError;
use crate::level::{Level, parse_level};
use crate::logger::{DEFAULT_ENV_PREFIX, Logger, LoggerBuilder};

/// Logger settings as they appear in a JSON config file.
///
/// Every field is optional in the file; missing fields take the defaults of
/// [`Logger::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Ordinal string or level name, e.g. `"warn"` or `"2"`.
    pub level: Option<String>,
    pub quiet: bool,
    /// Prefix for the `LOG_LEVEL` variable; the build-time prefix when absent.
    pub env_prefix: Option<String>,
    pub report_invalid_levels: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: None,
            quiet: false,
            env_prefix: None,
            report_invalid_levels: true,
        }
    }
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("parse logger config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("read {:?}", path))?;
        let config = Self::from_json_str(&text).with_context(|| format!("load {:?}", path))?;
        debug!("loaded logger config from {:?}", path);
        Ok(config)
    }

    /// Builder seeded with these settings.
    pub fn builder(&self) -> Result<LoggerBuilder, LevelError> {
        let level = match self.level.as_deref() {
            Some(level) => parse_level(level)?,
            None => Level::default(),
        };
        Ok(Logger::builder()
            .level(level)
            .quiet(self.quiet)
            .env_prefix(self.env_prefix.as_deref().unwrap_or(DEFAULT_ENV_PREFIX))
            .report_invalid_levels(self.report_invalid_levels))
    }
}

impl Logger {
    pub fn from_config(config: &LoggerConfig) -> Result<Logger, LevelError> {
        config.builder().map(LoggerBuilder::build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn empty_object_gives_defaults() -> Result<()> {
        let config = LoggerConfig::from_json_str("{}")?;
        assert_eq!(config, LoggerConfig::default());
        let logger = Logger::from_config(&config)?;
        assert_eq!(logger.level(), Level::Debug);
        assert!(!logger.quiet());
        Ok(())
    }

    #[test]
    fn fields_flow_into_the_logger() -> Result<()> {
        let config = LoggerConfig::from_json_str(
            r#"{"level": "Warn", "quiet": true, "env_prefix": "SVC_"}"#,
        )?;
        let logger = Logger::from_config(&config)?;
        assert_eq!(logger.level(), Level::Warn);
        assert!(logger.quiet());
        assert_eq!(logger.env_var_name(), "SVC_LOG_LEVEL");
        Ok(())
    }

    #[test]
    fn ordinal_levels_are_accepted() -> Result<()> {
        let config = LoggerConfig::from_json_str(r#"{"level": "-1"}"#)?;
        assert_eq!(Logger::from_config(&config)?.level(), Level::Trace);
        Ok(())
    }

    #[test]
    fn bad_level_is_a_level_error() {
        let config = LoggerConfig {
            level: Some("chatty".into()),
            ..LoggerConfig::default()
        };
        assert_eq!(
            Logger::from_config(&config).err(),
            Some(LevelError::UnknownLevelName("chatty".into()))
        );
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(LoggerConfig::from_json_str(r#"{"quiet": "yes"}"#).is_err());
    }

    #[test]
    fn load_reads_from_disk() -> Result<()> {
        let path = std::env::temp_dir().join(format!("loglite-config-{}.json", Uuid::new_v4()));
        fs::write(&path, r#"{"level": "error", "report_invalid_levels": false}"#)?;
        let config = LoggerConfig::load(&path);
        fs::remove_file(&path)?;
        let config = config?;
        assert_eq!(config.level.as_deref(), Some("error"));
        assert!(!config.report_invalid_levels);
        Ok(())
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join(format!("loglite-missing-{}.json", Uuid::new_v4()));
        let err = LoggerConfig::load(&path).expect_err("file does not exist");
        assert!(format!("{err:#}").contains("read"));
    }
}
