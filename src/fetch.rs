//! Models API client
//!
//! Single-shot HTTP client: one GET, full body buffered as text, parsed as
//! untyped JSON. No timeout and no retry.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::SyncError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct ModelsClient {
    http: Client,
}

impl ModelsClient {
    pub fn new() -> Result<Self, SyncError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| SyncError::Network {
                url: "(client setup)".to_string(),
                source,
            })?;

        Ok(Self { http })
    }

    /// Fetch `url` and parse the body as JSON.
    ///
    /// The HTTP status is not checked: an error page that happens to be JSON
    /// is returned as-is, anything else fails as [`SyncError::Parse`].
    pub async fn fetch_json(&self, url: &str) -> Result<Value, SyncError> {
        let network = |source| SyncError::Network {
            url: url.to_string(),
            source,
        };

        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, url, "Models API returned a non-success status");
        }

        let body = response.text().await.map_err(network)?;
        debug!(%status, bytes = body.len(), "Received response body");

        serde_json::from_str(&body).map_err(|source| SyncError::Parse {
            origin: url.to_string(),
            source,
        })
    }
}
