use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical, source-agnostic representation of one job posting.
///
/// Adapters construct these from heterogeneous feed responses; `title` and
/// `url` are guaranteed non-empty once a record leaves its adapter, and
/// `salary_monthly_usd` is always USD per month (adapters convert annual or
/// hourly quotes before the record leaves the adapter boundary).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary_monthly_usd: Option<f64>,
    pub description: Option<String>,
    pub url: String,
    pub source: String,
    pub posted_at: Option<DateTime<Utc>>,
}

/// Caller-supplied matching criteria, parsed once before a run.
///
/// Title and keyword entries are stored lowercased; matching is substring
/// based. An empty keyword list means "no keyword restriction".
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub min_salary_monthly_usd: f64,
    pub required_titles: Vec<String>,
    pub keywords: Vec<String>,
}

impl FilterCriteria {
    pub fn new(min_salary_monthly_usd: f64, titles: &[&str], keywords: &[&str]) -> Self {
        Self {
            min_salary_monthly_usd,
            required_titles: lowercase_terms(titles.iter().copied()),
            keywords: lowercase_terms(keywords.iter().copied()),
        }
    }

    /// Parse a comma-separated term list ("software engineer, data engineer").
    pub fn parse_terms(list: &str) -> Vec<String> {
        lowercase_terms(list.split(','))
    }
}

fn lowercase_terms<'a>(terms: impl Iterator<Item = &'a str>) -> Vec<String> {
    terms
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Failure of a single source fetch. Always absorbed by the pipeline: the
/// failing adapter contributes nothing and the run continues.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request to {url} timed out after {seconds}s")]
    Timeout { url: String, seconds: u64 },

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("malformed response from {feed}: {reason}")]
    MalformedResponse { feed: String, reason: String },
}

/// Run-level failure. Raised only when every configured source failed;
/// an empty-but-successful run is Ok(vec![]), not an error.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("all {sources} configured sources failed to fetch")]
    AllSourcesFailed { sources: usize },

    #[error("no sources configured")]
    NoSources,
}

/// Delivery failure in one sink. Logged by the caller; never invalidates the
/// computed result set.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("delivery failed: {0}")]
    Delivery(String),
}
