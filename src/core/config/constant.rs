// default app settings
pub const MEM_COUNTERS_VERSION: &str = "v1";
pub const DEFAULT_APP_NAME: &str = "unknown_service";
pub const APP_NAME_ENV_KEY: &str = "MEM_COUNTERS_APP_NAME";
pub const MAX_COUNTERS_ENV_KEY: &str = "MEM_COUNTERS_MAX";
pub const CONF_FILE_PATH_ENV_KEY: &str = "MEM_COUNTERS_CONFIG_FILE_PATH";
pub const CONFIG_FILENAME: &str = "USE_DEFAULT_CONFIGURATION";

// default registry settings
pub const DEFAULT_MAX_COUNTERS: usize = 1024;
pub const DEFAULT_MAX_NAME_LEN: usize = 50;

// default log settings
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const LOG_CONFIG_FILE: &str = "testdata/config/log4rs.yaml";
