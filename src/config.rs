use crate::types::FilterCriteria;
use clap::Parser;
use std::env;
use std::path::PathBuf;
use tracing::warn;

const DEFAULT_MIN_SALARY: f64 = 4000.0;
const DEFAULT_TITLES: &str = "software engineer";
const DEFAULT_KEYWORDS: &str = "ai";
const DEFAULT_FEEDS: &str = "https://www.thefirehose.dev/jobs.json";

/// Command-line surface. Every criteria flag falls back to the environment
/// variable the scheduled runner sets, then to a built-in default.
#[derive(Parser, Debug)]
#[command(name = "job-radar", about = "Aggregate, filter and dedupe job-listing feeds")]
pub struct Cli {
    /// Inclusive salary floor in USD/month (env: MIN_SALARY)
    #[arg(long)]
    pub min_salary: Option<f64>,

    /// Comma-separated title substrings to require (env: JOB_TITLES)
    #[arg(long)]
    pub titles: Option<String>,

    /// Comma-separated keywords, OR-matched against title/description (env: KEYWORDS)
    #[arg(long)]
    pub keywords: Option<String>,

    /// Comma-separated JSON feed URLs to poll (env: JOB_FEEDS)
    #[arg(long)]
    pub feeds: Option<String>,

    /// Skip the built-in RemoteOK source
    #[arg(long)]
    pub no_remoteok: bool,

    /// Per-source fetch timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub fetch_timeout_secs: u64,

    /// Where to write the JSON artifact of matching postings
    #[arg(long, default_value = "jobs_found.json")]
    pub artifact: PathBuf,

    /// Optional path for the Markdown digest (logged when absent)
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Optional path for an HTML rendering of the digest
    #[arg(long)]
    pub report_html: Option<PathBuf>,
}

/// Fully resolved run settings, parsed once before the pipeline runs.
#[derive(Debug)]
pub struct Settings {
    pub criteria: FilterCriteria,
    pub feed_urls: Vec<String>,
    pub use_remoteok: bool,
    pub fetch_timeout_secs: u64,
    pub artifact_path: PathBuf,
    pub report_path: Option<PathBuf>,
    pub report_html_path: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(cli: Cli) -> Self {
        let min_salary = cli
            .min_salary
            .or_else(|| parse_env_f64("MIN_SALARY"))
            .unwrap_or(DEFAULT_MIN_SALARY);

        let titles = cli
            .titles
            .or_else(|| env_nonempty("JOB_TITLES"))
            .unwrap_or_else(|| DEFAULT_TITLES.to_string());

        let keywords = cli
            .keywords
            .or_else(|| env_nonempty("KEYWORDS"))
            .unwrap_or_else(|| DEFAULT_KEYWORDS.to_string());

        let feeds = cli
            .feeds
            .or_else(|| env_nonempty("JOB_FEEDS"))
            .unwrap_or_else(|| DEFAULT_FEEDS.to_string());

        let criteria = FilterCriteria {
            min_salary_monthly_usd: min_salary.max(0.0),
            required_titles: FilterCriteria::parse_terms(&titles),
            keywords: FilterCriteria::parse_terms(&keywords),
        };

        let feed_urls = feeds
            .split(',')
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            criteria,
            feed_urls,
            use_remoteok: !cli.no_remoteok,
            fetch_timeout_secs: cli.fetch_timeout_secs,
            artifact_path: cli.artifact,
            report_path: cli.report,
            report_html_path: cli.report_html,
        }
    }
}

fn env_nonempty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env_f64(name: &str) -> Option<f64> {
    let raw = env_nonempty(name)?;
    match raw.trim().parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Ignoring unparsable {}={:?}", name, raw);
            None
        }
    }
}
