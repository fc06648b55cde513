use crate::fetcher::{FetchConfig, Fetcher};
use crate::normalize::{clean_text, monthly_from_quote, parse_monthly_salary, truncate};
use crate::sources::SourceAdapter;
use crate::types::{FetchError, Job};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, info, warn};

const SOURCE_ID: &str = "remoteok";
const DEFAULT_ENDPOINT: &str = "https://remoteok.com/api";
const DESCRIPTION_EXCERPT_CHARS: usize = 300;

/// RemoteOK public API adapter.
///
/// The endpoint returns a JSON array whose first element is a legal notice,
/// not a posting; entries without a position or link are skipped. Salary
/// bounds come back as annual USD figures in `salary_min`/`salary_max`.
pub struct RemoteOkSource {
    endpoint: String,
    fetcher: Fetcher,
}

impl RemoteOkSource {
    pub fn new(fetch_config: FetchConfig) -> Result<Self, FetchError> {
        Self::with_endpoint(DEFAULT_ENDPOINT.to_string(), fetch_config)
    }

    pub fn with_endpoint(endpoint: String, fetch_config: FetchConfig) -> Result<Self, FetchError> {
        Ok(Self {
            endpoint,
            fetcher: Fetcher::new(fetch_config)?,
        })
    }

    /// Map one raw API entry to a canonical Job. Returns None for the legal
    /// notice element and for entries missing a usable title or URL.
    pub fn map_entry(entry: &Value) -> Option<Job> {
        let obj = entry.as_object()?;

        let title = obj
            .get("position")
            .or_else(|| obj.get("title"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|t| !t.is_empty())?;

        let url = obj
            .get("url")
            .or_else(|| obj.get("apply_url"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|u| !u.is_empty())?;

        let company = obj
            .get("company")
            .and_then(Value::as_str)
            .and_then(clean_text);

        let location = obj
            .get("location")
            .and_then(Value::as_str)
            .and_then(clean_text)
            .or_else(|| Some("Remote".to_string()));

        let description = obj
            .get("description")
            .and_then(Value::as_str)
            .and_then(clean_text)
            .map(|d| truncate(&d, DESCRIPTION_EXCERPT_CHARS));

        let salary_monthly_usd = salary_from_entry(obj);

        let posted_at = obj
            .get("date")
            .and_then(Value::as_str)
            .and_then(parse_timestamp);

        Some(Job {
            title: title.to_string(),
            company,
            location,
            salary_monthly_usd,
            description,
            url: url.to_string(),
            source: SOURCE_ID.to_string(),
            posted_at,
        })
    }
}

/// Prefer the structured annual bounds; fall back to the free-text quote.
/// The lower bound is taken, since the floor filter compares against minimums.
fn salary_from_entry(obj: &serde_json::Map<String, Value>) -> Option<f64> {
    let min = obj.get("salary_min").and_then(Value::as_f64);
    let max = obj.get("salary_max").and_then(Value::as_f64);
    if let Some(amount) = min.or(max).filter(|a| *a > 0.0) {
        return Some(monthly_from_quote(amount));
    }
    obj.get("salary")
        .and_then(Value::as_str)
        .and_then(parse_monthly_salary)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[async_trait]
impl SourceAdapter for RemoteOkSource {
    fn source_id(&self) -> &str {
        SOURCE_ID
    }

    async fn fetch(&self) -> Result<Vec<Job>, FetchError> {
        let body = self.fetcher.fetch_json(&self.endpoint).await?;

        let entries = body
            .as_array()
            .ok_or_else(|| FetchError::MalformedResponse {
                feed: SOURCE_ID.to_string(),
                reason: "expected a JSON array".to_string(),
            })?;

        let mut jobs = Vec::new();
        for entry in entries {
            match Self::map_entry(entry) {
                Some(job) => jobs.push(job),
                None => debug!("Skipping non-posting RemoteOK entry"),
            }
        }

        if jobs.is_empty() && !entries.is_empty() {
            warn!("RemoteOK returned {} entries, none mappable", entries.len());
        }
        info!("RemoteOK: mapped {} postings", jobs.len());
        Ok(jobs)
    }
}
