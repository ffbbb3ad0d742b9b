//! HTTP client for the TSE simplified-tally endpoint.
//!
//! The endpoint serves one fixed JSON document per contest. There are no
//! query parameters, no authentication, and no pagination; a fetch is a
//! single GET followed by deserialization.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::TseError;
use crate::types::SimplifiedTally;

/// Client bound to one tally document URL.
///
/// Point the endpoint at a mock server in tests.
pub struct TseClient {
    client: Client,
    endpoint: Url,
}

impl TseClient {
    /// Creates a client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`TseError::InvalidEndpoint`] when `endpoint` does not
    /// parse as a URL, or [`TseError::Http`] when the underlying HTTP
    /// client cannot be constructed.
    pub fn new(endpoint: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, TseError> {
        let endpoint = Url::parse(endpoint).map_err(|e| TseError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, endpoint })
    }

    /// URL of the tally document this client polls.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Fetches and deserializes one tally snapshot.
    ///
    /// One GET per call, no retry, no caching. The poll loop treats a
    /// failed fetch as a skipped cycle and tries again on the next tick.
    ///
    /// # Errors
    ///
    /// Returns [`TseError::Http`] on network failure or a non-2xx
    /// status, and [`TseError::Deserialize`] when the body is not a
    /// tally document.
    pub async fn fetch_simplified(&self) -> Result<SimplifiedTally, TseError> {
        let response = self.client.get(self.endpoint.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let tally: SimplifiedTally =
            serde_json::from_str(&body).map_err(|e| TseError::Deserialize {
                context: self.endpoint.to_string(),
                source: e,
            })?;
        tracing::debug!(candidates = tally.cand.len(), "fetched simplified tally");
        Ok(tally)
    }
}
