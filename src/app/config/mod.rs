//! Filesystem and environment-backed configuration loading.
//!
//! Pure schema/model parsing lives in `domain::configuration`.

mod load_config;

pub use load_config::{
    CONFIG_ENV_VAR, ConfigSource, DEFAULT_CONFIG_FILE, load_config, resolve_config_source,
};
