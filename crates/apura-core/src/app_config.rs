//! Runtime configuration for the tally watcher.

use crate::locale::Locale;

/// National totals of the 2022 presidential runoff ("dados simplificados").
pub const DEFAULT_ENDPOINT_URL: &str =
    "https://resultados.tse.jus.br/oficial/ele2022/544/dados-simplificados/br/br-c0001-e000544-r.json";

/// Delay between poll cycles.
pub const DEFAULT_INTERVAL_MS: u64 = 10_000;

/// Per-request timeout for tally fetches.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// User-Agent header sent with every fetch.
pub const DEFAULT_USER_AGENT: &str = "apura/0.1 (tally-watch)";

/// Log level applied when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration resolved from the environment.
///
/// Every field has a default, so an empty environment yields a working
/// configuration pointed at the official endpoint. See
/// [`crate::config::load_app_config`] for the `APURA_*` variables that
/// override each field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Full URL of the simplified-tally JSON document.
    pub endpoint_url: String,
    /// Milliseconds between poll cycles. Always greater than zero.
    pub interval_ms: u64,
    /// Locale used to group vote counts for display.
    pub locale: Locale,
    /// Seconds before an in-flight fetch is abandoned.
    pub request_timeout_secs: u64,
    /// User-Agent header for outbound requests.
    pub user_agent: String,
    /// Fallback log level when `RUST_LOG` is absent.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            interval_ms: DEFAULT_INTERVAL_MS,
            locale: Locale::PtBr,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
