//! Remote procedure calls against the hosted backend.

mod clubs;
mod matches;

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::BackendConfig;
use crate::error::{FifteenAllError, Result};

/// Thin client for the backend's `rest/v1/rpc` endpoints.
pub struct BackendClient {
    http: reqwest::Client,
    url: String,
    anon_key: String,
    timeout: Duration,
}

impl BackendClient {
    pub fn new(http: reqwest::Client, config: &BackendConfig) -> Self {
        Self {
            http,
            url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Call the remote function `name` with JSON `params` and decode its JSON result.
    pub async fn rpc<P, R>(&self, name: &str, params: &P) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}/rest/v1/rpc/{name}", self.url);
        debug!(%url, "calling remote function");

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .timeout(self.timeout)
            .json(params)
            .send()
            .await
            .map_err(|e| FifteenAllError::Http {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FifteenAllError::UnexpectedStatus { url, status });
        }

        response
            .json()
            .await
            .map_err(|e| FifteenAllError::ResponseBody { url, source: e })
    }
}
