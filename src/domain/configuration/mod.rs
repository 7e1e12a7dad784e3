pub mod app_config;
pub mod parse;

pub use app_config::{AppConfig, DefaultsConfig, RemoteConfig};
pub use parse::{parse_config_content, render_config};
