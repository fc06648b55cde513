use crate::dedup::Deduplicator;
use crate::filter::FilterEngine;
use crate::sources::SourceAdapter;
use crate::types::{FetchError, FilterCriteria, Job, PipelineError};
use std::time::Duration;
use tracing::{info, warn};

const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Orchestrates one run: fetch every adapter concurrently, concatenate in
/// adapter-list order, filter, dedupe.
///
/// A failed or timed-out adapter contributes nothing and the run continues;
/// the run itself fails only when every adapter failed, so that total source
/// outage stays distinguishable from a legitimately empty result.
pub struct AggregationPipeline {
    fetch_timeout: Duration,
}

impl Default for AggregationPipeline {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS))
    }
}

impl AggregationPipeline {
    /// `fetch_timeout` bounds each adapter fetch as a whole, on top of
    /// whatever request timeout the adapter's own client carries.
    pub fn new(fetch_timeout: Duration) -> Self {
        Self { fetch_timeout }
    }

    pub async fn run(
        &self,
        adapters: &[Box<dyn SourceAdapter>],
        criteria: &FilterCriteria,
    ) -> Result<Vec<Job>, PipelineError> {
        if adapters.is_empty() {
            return Err(PipelineError::NoSources);
        }

        info!("Starting aggregation run over {} sources", adapters.len());

        let fetches = adapters.iter().map(|adapter| self.bounded_fetch(adapter.as_ref()));
        let outcomes = futures::future::join_all(fetches).await;

        // Dedup needs the full candidate set in hand, so filtering only
        // starts once every fetch has completed or failed.
        let mut all_jobs: Vec<Job> = Vec::new();
        let mut failures = 0usize;
        for (adapter, outcome) in adapters.iter().zip(outcomes) {
            match outcome {
                Ok(jobs) => {
                    info!("Source {} contributed {} postings", adapter.source_id(), jobs.len());
                    all_jobs.extend(jobs);
                }
                Err(e) => {
                    warn!("Source {} failed, contributing nothing: {}", adapter.source_id(), e);
                    failures += 1;
                }
            }
        }

        if failures == adapters.len() {
            return Err(PipelineError::AllSourcesFailed {
                sources: adapters.len(),
            });
        }

        let fetched = all_jobs.len();
        let matched: Vec<Job> = all_jobs
            .into_iter()
            .filter(|job| job_is_well_formed(job))
            .filter(|job| FilterEngine::accepts(job, criteria))
            .collect();
        let matched_count = matched.len();

        let unique = Deduplicator::dedupe(matched);

        info!(
            "Run complete: {} fetched, {} matched criteria, {} unique",
            fetched,
            matched_count,
            unique.len()
        );
        Ok(unique)
    }

    async fn bounded_fetch(&self, adapter: &dyn SourceAdapter) -> Result<Vec<Job>, FetchError> {
        match tokio::time::timeout(self.fetch_timeout, adapter.fetch()).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                url: adapter.source_id().to_string(),
                seconds: self.fetch_timeout.as_secs(),
            }),
        }
    }
}

/// Adapters drop records without a title or URL at the mapping boundary; this
/// guard holds the invariant for adapters added later.
fn job_is_well_formed(job: &Job) -> bool {
    !job.title.trim().is_empty() && !job.url.trim().is_empty()
}
