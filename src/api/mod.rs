//! mod `api` provides the topmost fundamental APIs for users of the
//! counter store. The store must be initialized once per process before
//! any counter operation:
//!
//!  1. `init_default()`, using environment variables and default values.
//!  2. `init_with_config(config_entity: ConfigEntity)`, using a customized config entity.
//!  3. `init_with_config_file(config_path: &mut String)`, using a yaml file.

mod api;
mod init;

pub use self::api::*;
pub use init::*;
