use crate::sinks::JobSink;
use crate::types::{Job, SinkError};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

/// Writes the final Jobs as a pretty-printed JSON array, the flat
/// list-of-records shape an external artifact store picks up.
pub struct JsonArtifactSink {
    path: PathBuf,
}

impl JsonArtifactSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl JobSink for JsonArtifactSink {
    fn sink_name(&self) -> &str {
        "json-artifact"
    }

    async fn deliver(&self, jobs: &[Job]) -> Result<(), SinkError> {
        let serialized = serde_json::to_string_pretty(jobs)?;
        tokio::fs::write(&self.path, serialized).await?;
        info!("Wrote {} postings to {}", jobs.len(), self.path.display());
        Ok(())
    }
}
