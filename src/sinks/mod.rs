pub mod artifact;
pub mod report;

pub use artifact::JsonArtifactSink;
pub use report::MarkdownReportSink;

use crate::types::{Job, SinkError};
use async_trait::async_trait;

/// Delivery target for the final result set: email composer, issue creator,
/// artifact writer. The pipeline's output is handed to each configured sink
/// once; a sink failure is the caller's to log and never invalidates the
/// computed Jobs.
#[async_trait]
pub trait JobSink: Send + Sync {
    fn sink_name(&self) -> &str;

    async fn deliver(&self, jobs: &[Job]) -> Result<(), SinkError>;
}
