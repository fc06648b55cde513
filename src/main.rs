use anyhow::Context;
use clap::Parser;
use job_radar::config::{Cli, Settings};
use job_radar::fetcher::FetchConfig;
use job_radar::{
    AggregationPipeline, JobSink, JsonArtifactSink, JsonFeedSource, MarkdownReportSink,
    RemoteOkSource, SourceAdapter,
};
use std::time::Duration;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let settings = Settings::resolve(Cli::parse());
    info!(
        "Starting job-radar: floor ${}/month, titles {:?}, keywords {:?}",
        settings.criteria.min_salary_monthly_usd,
        settings.criteria.required_titles,
        settings.criteria.keywords
    );

    let fetch_config = FetchConfig {
        timeout_seconds: settings.fetch_timeout_secs,
        ..FetchConfig::default()
    };

    let mut adapters: Vec<Box<dyn SourceAdapter>> = Vec::new();
    if settings.use_remoteok {
        adapters.push(Box::new(RemoteOkSource::new(fetch_config.clone())?));
    }
    for url in &settings.feed_urls {
        match JsonFeedSource::new(url, fetch_config.clone()) {
            Ok(source) => adapters.push(Box::new(source)),
            Err(e) => warn!("Skipping feed {}: {}", url, e),
        }
    }

    let pipeline = AggregationPipeline::new(Duration::from_secs(settings.fetch_timeout_secs));
    let jobs = pipeline
        .run(&adapters, &settings.criteria)
        .await
        .context("aggregation run failed: no source could be reached")?;

    if jobs.is_empty() {
        info!("Run succeeded: no postings matched the criteria");
        return Ok(());
    }

    info!("Run succeeded: {} matching postings", jobs.len());

    let sinks: Vec<Box<dyn JobSink>> = vec![
        Box::new(JsonArtifactSink::new(settings.artifact_path.clone())),
        Box::new(
            MarkdownReportSink::new(settings.report_path.clone())
                .with_html(settings.report_html_path.clone()),
        ),
    ];

    // A sink failure is reported but never discards the computed result.
    for sink in &sinks {
        if let Err(e) = sink.deliver(&jobs).await {
            error!("Sink {} failed: {}", sink.sink_name(), e);
        }
    }

    Ok(())
}
