//! Shared primitives for the tally watcher: runtime configuration and
//! locale-aware number formatting.

pub mod app_config;
pub mod config;
pub mod locale;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use locale::Locale;
