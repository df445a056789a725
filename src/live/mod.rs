//! Remote stats API source, used only when live mode is on.
//!
//! One blocking client with a fixed timeout; no retries. Any transport
//! error or non-2xx status reads as source-unavailable and the caller falls
//! back to local data.

use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::info;
use url::Url;

#[derive(Debug, Error)]
pub enum LiveError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("bad URL: {0}")]
    Url(#[from] url::ParseError),
}

pub struct LiveSource {
    base: Url,
    client: reqwest::blocking::Client,
}

impl LiveSource {
    pub fn new(base: &str, timeout: Duration) -> Result<Self, LiveError> {
        Ok(Self {
            base: Url::parse(base)?,
            client: reqwest::blocking::Client::builder().timeout(timeout).build()?,
        })
    }

    /// Fetch one logical endpoint as JSON.
    pub fn fetch(&self, endpoint: &str) -> Result<Value, LiveError> {
        let url = self.base.join(&normalize(endpoint))?;
        info!("fetching live data from {url}");

        let response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(LiveError::Status(response.status().as_u16()));
        }
        Ok(response.json()?)
    }
}

/// Bare endpoint names get the `/api` prefix; rooted paths pass through.
fn normalize(endpoint: &str) -> String {
    if endpoint.starts_with('/') {
        endpoint.to_string()
    } else {
        format!("/api/{endpoint}")
    }
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn rooted_endpoints_pass_through() {
        assert_eq!(normalize("/api/v1/teams"), "/api/v1/teams");
        assert_eq!(normalize("/api/v1/schedule?sportId=1"), "/api/v1/schedule?sportId=1");
    }

    #[test]
    fn bare_endpoints_get_the_api_prefix() {
        assert_eq!(normalize("v1/teams"), "/api/v1/teams");
    }
}
