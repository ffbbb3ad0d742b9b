//! Environment-driven configuration loading.
//!
//! Resolution order is `.env` file, then process environment, then the
//! defaults in [`crate::app_config`]. Command-line overrides are layered
//! on afterwards by the binary.

use thiserror::Error;

use crate::app_config::AppConfig;
use crate::locale::Locale;

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was present but its value was unusable.
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Loads configuration, reading a `.env` file first when present.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] if a set variable fails to
/// parse or validate.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Loads configuration from the process environment only.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] if a set variable fails to
/// parse or validate.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = AppConfig::default();

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Err(_) => Ok(default),
            Ok(raw) => raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        }
    };

    let interval_ms = parse_u64("APURA_INTERVAL_MS", defaults.interval_ms)?;
    if interval_ms == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "APURA_INTERVAL_MS".to_string(),
            reason: "refresh interval must be greater than zero".to_string(),
        });
    }

    let locale_tag = or_default("APURA_LOCALE", defaults.locale.as_tag());
    let locale = Locale::from_tag(&locale_tag).ok_or_else(|| ConfigError::InvalidEnvVar {
        var: "APURA_LOCALE".to_string(),
        reason: format!("unrecognized locale '{locale_tag}' (expected \"pt-BR\" or \"en-US\")"),
    })?;

    Ok(AppConfig {
        endpoint_url: or_default("APURA_ENDPOINT_URL", &defaults.endpoint_url),
        interval_ms,
        locale,
        request_timeout_secs: parse_u64(
            "APURA_REQUEST_TIMEOUT_SECS",
            defaults.request_timeout_secs,
        )?,
        user_agent: or_default("APURA_USER_AGENT", &defaults.user_agent),
        log_level: or_default("APURA_LOG_LEVEL", &defaults.log_level),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;
    use crate::app_config::{DEFAULT_ENDPOINT_URL, DEFAULT_INTERVAL_MS};

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let map = HashMap::new();
        let config = build_app_config(lookup_from_map(&map)).expect("defaults should build");
        assert_eq!(config.endpoint_url, DEFAULT_ENDPOINT_URL);
        assert_eq!(config.interval_ms, DEFAULT_INTERVAL_MS);
        assert_eq!(config.locale, Locale::PtBr);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.user_agent, "apura/0.1 (tally-watch)");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn endpoint_url_is_overridable() {
        let map = HashMap::from([("APURA_ENDPOINT_URL", "http://localhost:8080/tally.json")]);
        let config = build_app_config(lookup_from_map(&map)).expect("override should build");
        assert_eq!(config.endpoint_url, "http://localhost:8080/tally.json");
    }

    #[test]
    fn interval_is_overridable() {
        let map = HashMap::from([("APURA_INTERVAL_MS", "2500")]);
        let config = build_app_config(lookup_from_map(&map)).expect("override should build");
        assert_eq!(config.interval_ms, 2500);
    }

    #[test]
    fn non_numeric_interval_is_rejected() {
        let map = HashMap::from([("APURA_INTERVAL_MS", "soon")]);
        let err = build_app_config(lookup_from_map(&map)).unwrap_err();
        let ConfigError::InvalidEnvVar { var, .. } = err;
        assert_eq!(var, "APURA_INTERVAL_MS");
    }

    #[test]
    fn zero_interval_is_rejected() {
        let map = HashMap::from([("APURA_INTERVAL_MS", "0")]);
        let err = build_app_config(lookup_from_map(&map)).unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn locale_is_overridable() {
        let map = HashMap::from([("APURA_LOCALE", "en-US")]);
        let config = build_app_config(lookup_from_map(&map)).expect("override should build");
        assert_eq!(config.locale, Locale::EnUs);
    }

    #[test]
    fn unknown_locale_is_rejected() {
        let map = HashMap::from([("APURA_LOCALE", "fr-FR")]);
        let err = build_app_config(lookup_from_map(&map)).unwrap_err();
        assert!(err.to_string().contains("APURA_LOCALE"));
        assert!(err.to_string().contains("fr-FR"));
    }

    #[test]
    fn non_numeric_timeout_is_rejected() {
        let map = HashMap::from([("APURA_REQUEST_TIMEOUT_SECS", "fast")]);
        let err = build_app_config(lookup_from_map(&map)).unwrap_err();
        let ConfigError::InvalidEnvVar { var, .. } = err;
        assert_eq!(var, "APURA_REQUEST_TIMEOUT_SECS");
    }

    #[test]
    fn user_agent_and_log_level_are_overridable() {
        let map = HashMap::from([
            ("APURA_USER_AGENT", "tally-probe/2.0"),
            ("APURA_LOG_LEVEL", "debug"),
        ]);
        let config = build_app_config(lookup_from_map(&map)).expect("override should build");
        assert_eq!(config.user_agent, "tally-probe/2.0");
        assert_eq!(config.log_level, "debug");
    }
}
