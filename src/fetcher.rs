use crate::types::FetchError;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub follow_redirects: bool,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "job-radar/0.1".to_string(),
            timeout_seconds: 10,
            follow_redirects: true,
            max_redirects: 5,
        }
    }
}

/// Shared HTTP plumbing for source adapters: one configured client, one
/// best-effort GET per fetch. Retry policy belongs to the invoking schedule,
/// not here.
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let redirects = if config.follow_redirects {
            reqwest::redirect::Policy::limited(config.max_redirects)
        } else {
            reqwest::redirect::Policy::none()
        };
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(redirects)
            .build()?;

        Ok(Self { client, config })
    }

    /// GET a JSON endpoint. Non-2xx statuses and timeouts surface as
    /// FetchError; callers treat both the same way (empty contribution).
    pub async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        debug!("Fetching {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                    seconds: self.config.timeout_seconds,
                }
            } else {
                FetchError::Http(e)
            }
        })?;

        let status = response.status();
        let response = response.error_for_status()?;
        let body: serde_json::Value = response.json().await?;

        info!("Fetched {} (HTTP {})", url, status.as_u16());
        Ok(body)
    }
}
