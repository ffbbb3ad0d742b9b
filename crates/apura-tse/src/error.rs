use thiserror::Error;

/// Errors from the TSE tally client.
#[derive(Debug, Error)]
pub enum TseError {
    /// Network failure, timeout, TLS problem, or a non-2xx status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not a tally document.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured endpoint is not a usable URL.
    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}
