//! Initialization funcs set up the store's runtime environment:
//! 1. override global config, from manual config or yaml file or env variable
//! 2. initialize the global logger
//! 3. install the process-global `CounterStore`

use crate::base::StoreError;
use crate::config::{self, ConfigEntity};
use crate::stat::CounterStore;
use crate::{logging, Result};
use lazy_static::lazy_static;
use std::sync::{Arc, RwLock};

lazy_static! {
    static ref GLOBAL_STORE: RwLock<Option<Arc<CounterStore>>> = RwLock::new(None);
}

/// `init_default` initializes the store using the configuration from
/// system environment and the default values.
#[inline]
pub fn init_default() -> Result<()> {
    init_counters(&mut String::new())
}

/// `init_with_config` initializes the store using the given config.
#[inline]
pub fn init_with_config(config_entity: ConfigEntity) -> Result<()> {
    config_entity.check()?;
    config::reset_global_config(config_entity);
    config::override_config_from_env_and_init_log()?;
    install_global_store();
    Ok(())
}

/// `init_with_config_file` loads general configuration from the given YAML
/// file and initializes the store.
#[inline]
pub fn init_with_config_file(config_path: &mut String) -> Result<()> {
    init_counters(config_path)
}

#[inline]
fn init_counters(config_path: &mut String) -> Result<()> {
    // Initialize general config and logging module.
    config::init_config_with_yaml(config_path)?;
    install_global_store();
    Ok(())
}

// Create the store on the first init; later calls attach to the existing
// one, keeping its counters.
fn install_global_store() {
    let mut store = GLOBAL_STORE.write().unwrap();
    if store.is_none() {
        *store = Some(Arc::new(CounterStore::new()));
    } else {
        logging::info!("[init] counter store already initialized, attaching");
    }
}

/// The process-global store handle. Fails with `NotInitialized` before the
/// one-time init has run.
pub fn global_store() -> Result<Arc<CounterStore>> {
    GLOBAL_STORE
        .read()
        .unwrap()
        .as_ref()
        .cloned()
        .ok_or_else(|| StoreError::NotInitialized.into())
}

/// Drop the installed store so tests can rebuild one with fresh limits.
pub fn reset_global_store() {
    *GLOBAL_STORE.write().unwrap() = None;
}
