pub mod jsonfeed;
pub mod remoteok;

pub use jsonfeed::JsonFeedSource;
pub use remoteok::RemoteOkSource;

use crate::types::{FetchError, Job};
use async_trait::async_trait;

/// One external job feed, mapped into canonical Job records.
///
/// Concrete adapters differ only in endpoint URL and response-shape mapping;
/// everything downstream of this trait is source-agnostic. An adapter owns all
/// normalization for its feed: absolute URLs, monthly USD salaries, cleaned
/// description text. Entries it cannot make sense of are skipped, never
/// allowed to abort the fetch.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Identifier recorded on every Job this adapter produces.
    fn source_id(&self) -> &str;

    /// One best-effort fetch of the feed. A failure here is recovered by the
    /// pipeline; the adapter contributes nothing for the run.
    async fn fetch(&self) -> Result<Vec<Job>, FetchError>;
}
