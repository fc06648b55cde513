use crate::fetcher::{FetchConfig, Fetcher};
use crate::normalize::{absolutize_url, clean_text, parse_monthly_salary, truncate};
use crate::sources::SourceAdapter;
use crate::types::{FetchError, Job};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

const DESCRIPTION_EXCERPT_CHARS: usize = 300;

/// Generic adapter for ad-hoc JSON job feeds (e.g. thefirehose.dev).
///
/// Tolerates the two shapes these feeds come in (a bare array of postings or
/// an object with a `jobs` array) and resolves relative links against the
/// endpoint. New feeds of either shape are added by constructing another
/// instance with a different URL; nothing downstream changes.
pub struct JsonFeedSource {
    endpoint: Url,
    source_id: String,
    fetcher: Fetcher,
}

impl JsonFeedSource {
    pub fn new(endpoint: &str, fetch_config: FetchConfig) -> Result<Self, FetchError> {
        let endpoint = Url::parse(endpoint)?;
        let source_id = endpoint
            .domain()
            .map(str::to_string)
            .unwrap_or_else(|| "jsonfeed".to_string());
        Ok(Self {
            endpoint,
            source_id,
            fetcher: Fetcher::new(fetch_config)?,
        })
    }

    /// Map one feed entry to a canonical Job; None for entries missing a
    /// usable title or link. `base` is the feed endpoint, for resolving
    /// relative links.
    pub fn map_entry(base: &Url, source_id: &str, entry: &Value) -> Option<Job> {
        let obj = entry.as_object()?;

        let title = obj
            .get("title")
            .or_else(|| obj.get("position"))
            .and_then(Value::as_str)
            .and_then(clean_text)?;

        let url = obj
            .get("url")
            .or_else(|| obj.get("link"))
            .and_then(Value::as_str)
            .and_then(|link| absolutize_url(base, link))?;

        let company = obj
            .get("company")
            .and_then(Value::as_str)
            .and_then(clean_text);

        let location = obj
            .get("location")
            .and_then(Value::as_str)
            .and_then(clean_text);

        let description = obj
            .get("description")
            .and_then(Value::as_str)
            .and_then(clean_text)
            .map(|d| truncate(&d, DESCRIPTION_EXCERPT_CHARS));

        // These feeds quote salaries as free text when they quote them at all.
        let salary_monthly_usd = obj
            .get("salary")
            .and_then(Value::as_str)
            .and_then(parse_monthly_salary);

        let posted_at = obj
            .get("posted_date")
            .or_else(|| obj.get("date"))
            .and_then(Value::as_str)
            .and_then(parse_timestamp);

        Some(Job {
            title,
            company,
            location,
            salary_monthly_usd,
            description,
            url,
            source: source_id.to_string(),
            posted_at,
        })
    }
}

/// Accept RFC 3339 or a plain date; feeds are inconsistent here.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[async_trait]
impl SourceAdapter for JsonFeedSource {
    fn source_id(&self) -> &str {
        &self.source_id
    }

    async fn fetch(&self) -> Result<Vec<Job>, FetchError> {
        let body = self.fetcher.fetch_json(self.endpoint.as_str()).await?;

        let entries = match &body {
            Value::Array(list) => list.as_slice(),
            Value::Object(obj) => obj
                .get("jobs")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .ok_or_else(|| FetchError::MalformedResponse {
                    feed: self.source_id.clone(),
                    reason: "object response without a jobs array".to_string(),
                })?,
            _ => {
                return Err(FetchError::MalformedResponse {
                    feed: self.source_id.clone(),
                    reason: "expected an array or object response".to_string(),
                })
            }
        };

        let mut jobs = Vec::new();
        for entry in entries {
            match Self::map_entry(&self.endpoint, &self.source_id, entry) {
                Some(job) => jobs.push(job),
                None => debug!("Skipping malformed entry from {}", self.source_id),
            }
        }

        info!("{}: mapped {} postings", self.source_id, jobs.len());
        Ok(jobs)
    }
}
