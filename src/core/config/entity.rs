use super::constant::*;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug)]
pub struct AppConfig {
    // app_name represents the name of the host process embedding the store.
    pub app_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            app_name: DEFAULT_APP_NAME.into(),
        }
    }
}

// RegistryConfig represents the capacity bounds of the counter table.
// Both items are read once when the store is created and are immutable for
// the store's life.
#[derive(Serialize, Deserialize, Debug)]
pub struct RegistryConfig {
    // max_counters bounds the number of distinct counter names.
    pub max_counters: usize,
    // max_name_len bounds the length of a counter name in bytes.
    pub max_name_len: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            max_counters: DEFAULT_MAX_COUNTERS,
            max_name_len: DEFAULT_MAX_NAME_LEN,
        }
    }
}

// LogConfig represents the configuration of logging in the store.
#[derive(Serialize, Deserialize, Debug)]
pub struct LogConfig {
    pub config_file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            config_file: LOG_CONFIG_FILE.into(),
        }
    }
}

// CountersConfig represents the general configuration of the counter store.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct CountersConfig {
    pub app: AppConfig,
    pub registry: RegistryConfig,
    pub log: LogConfig,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ConfigEntity {
    pub version: String,
    pub config: CountersConfig,
}

impl Default for ConfigEntity {
    fn default() -> Self {
        ConfigEntity {
            version: MEM_COUNTERS_VERSION.into(),
            config: CountersConfig::default(),
        }
    }
}

impl ConfigEntity {
    pub fn new() -> Self {
        ConfigEntity::default()
    }

    pub fn check(&self) -> Result<()> {
        if self.version.is_empty() {
            return Err(Error::msg("empty version"));
        }
        if self.config.app.app_name.is_empty() {
            return Err(Error::msg("empty app name"));
        }
        if self.config.registry.max_counters == 0 {
            return Err(Error::msg(
                "illegal registry configuration: max_counters == 0",
            ));
        }
        if self.config.registry.max_name_len == 0 {
            return Err(Error::msg(
                "illegal registry configuration: max_name_len == 0",
            ));
        }
        Ok(())
    }
}

impl fmt::Display for ConfigEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fmtted = serde_json::to_string_pretty(self).unwrap();
        write!(f, "{}", fmtted)
    }
}
