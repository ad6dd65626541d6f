use super::{constant::*, ConfigEntity};
use crate::{logging, utils, Error, Result};
use std::cell::RefCell;
use std::env;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

thread_local! {
    static GLOBAL_CONFIG: RefCell<ConfigEntity> = RefCell::new(ConfigEntity::new());
}

pub fn reset_global_config(entity: ConfigEntity) {
    GLOBAL_CONFIG.with(|c| {
        *c.borrow_mut() = entity;
    });
}

// init_config_with_yaml loads general configuration from the YAML file
// under the provided path, then applies environment overrides.
pub fn init_config_with_yaml(config_path: &mut String) -> Result<()> {
    apply_yaml_config_file(config_path)?;
    override_config_from_env_and_init_log()?;
    Ok(())
}

pub fn override_config_from_env_and_init_log() -> Result<()> {
    override_items_from_system_env()?;
    #[cfg(any(feature = "logger_env", feature = "logger_log4rs"))]
    init_log()?;
    Ok(())
}

// apply_yaml_config_file loads general configuration from the given YAML file.
fn apply_yaml_config_file(config_path: &mut String) -> Result<()> {
    // Priority: system environment > YAML file > default config
    if utils::is_blank(config_path) {
        // If the config file path is absent, try to resolve it from the system env.
        *config_path = env::var(CONF_FILE_PATH_ENV_KEY).unwrap_or_else(|_| CONFIG_FILENAME.into());
    }
    load_global_config_from_yaml_file(config_path)?;
    Ok(())
}

fn load_global_config_from_yaml_file(path_str: &str) -> Result<()> {
    let path = Path::new(path_str);
    if path_str == CONFIG_FILENAME {
        // use the default global config.
        return Ok(());
    }
    if !path.exists() {
        return Err(Error::msg("mem-counters YAML configuration file does not exist!"));
    }
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    let entity: ConfigEntity = serde_yaml::from_str(&content)?;
    entity.check()?;
    logging::info!("[Config] Resolving mem-counters config from file, file {}", path_str);
    reset_global_config(entity);
    Ok(())
}

fn override_items_from_system_env() -> Result<()> {
    let app_name = env::var(APP_NAME_ENV_KEY).unwrap_or_default();
    let max_counters = env::var(MAX_COUNTERS_ENV_KEY)
        .ok()
        .and_then(|v| v.parse::<usize>().ok());

    GLOBAL_CONFIG
        .try_with(|c| -> Result<()> {
            let mut cfg = c.borrow_mut();
            if !utils::is_blank(&app_name) {
                cfg.config.app.app_name = app_name;
            }
            if let Some(max_counters) = max_counters {
                cfg.config.registry.max_counters = max_counters;
            }
            cfg.check()?;
            Ok(())
        })
        .unwrap()?;
    Ok(())
}

#[cfg(any(feature = "logger_env", feature = "logger_log4rs"))]
pub fn init_log() -> Result<()> {
    // Fundamental config items from the system environment, if present,
    // already override the values from the config file at this point.
    logging::logger_init(log_config_file());

    logging::info!("[Config] App name resolved, appName {}", app_name());
    GLOBAL_CONFIG
        .try_with(|c| {
            logging::info!(
                "[Config] Print effective global config, globalConfig {:?}",
                c.borrow()
            );
        })
        .unwrap();

    Ok(())
}

#[inline]
pub fn log_config_file() -> Option<String> {
    GLOBAL_CONFIG
        .try_with(|c| c.borrow().config.log.config_file.clone())
        .ok()
}

#[inline]
pub fn app_name() -> String {
    GLOBAL_CONFIG
        .try_with(|c| c.borrow().config.app.app_name.clone())
        .unwrap()
}

#[inline]
pub fn registry_max_counters() -> usize {
    GLOBAL_CONFIG
        .try_with(|c| c.borrow().config.registry.max_counters)
        .unwrap()
}

#[inline]
pub fn registry_max_name_len() -> usize {
    GLOBAL_CONFIG
        .try_with(|c| c.borrow().config.registry.max_name_len)
        .unwrap()
}
