// src/core/net.rs
// Single blocking HTTP GET. One attempt, no retries.
// Proxy settings come from the environment (HTTP_PROXY / HTTPS_PROXY).

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::config::options::FetchOptions;
use crate::error::{Result, ScrapeError};

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self> {
        Self::with_settings(opts.timeout, &opts.user_agent)
    }

    pub fn with_settings(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(ScrapeError::client_setup)?;
        Ok(Self { client })
    }

    /// GET `url` and return the body as text.
    ///
    /// Timeouts, connection failures and any non-2xx status all come back as
    /// `ScrapeError::Network`.
    pub fn fetch(&self, url: &str) -> Result<String> {
        info!("Fetching: {url}");

        let resp = self.client.get(url).send().map_err(|e| {
            let reason = if e.is_timeout() {
                s!("request timed out")
            } else if e.is_connect() {
                format!("host unreachable ({e})")
            } else {
                e.to_string()
            };
            ScrapeError::network(url, reason)
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::network(url, format!("HTTP status {status}")));
        }

        let body = resp.text().map_err(|e| ScrapeError::network(url, e))?;
        debug!(bytes = body.len(), "response body received");
        Ok(body)
    }
}
