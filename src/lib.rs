pub mod types;
pub mod normalize;
pub mod fetcher;
pub mod filter;
pub mod dedup;
pub mod pipeline;
pub mod config;
pub mod sources;
pub mod sinks;

pub use types::*;
pub use fetcher::{FetchConfig, Fetcher};
pub use filter::FilterEngine;
pub use dedup::Deduplicator;
pub use pipeline::AggregationPipeline;
pub use sources::{JsonFeedSource, RemoteOkSource, SourceAdapter};
pub use sinks::{JobSink, JsonArtifactSink, MarkdownReportSink};
