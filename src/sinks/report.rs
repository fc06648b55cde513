use crate::sinks::JobSink;
use crate::types::{Job, SinkError};
use async_trait::async_trait;
use chrono::Utc;
use std::path::PathBuf;
use tracing::info;

/// Renders the result set as a numbered digest, the shape an email composer
/// forwards to a human. Markdown always; an HTML rendering of the same digest
/// is written alongside when an HTML path is configured. With no paths at all
/// the Markdown goes to the log, which is enough for a scheduled-runner setup.
pub struct MarkdownReportSink {
    path: Option<PathBuf>,
    html_path: Option<PathBuf>,
}

impl MarkdownReportSink {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            html_path: None,
        }
    }

    pub fn with_html(mut self, html_path: Option<PathBuf>) -> Self {
        self.html_path = html_path;
        self
    }
}

#[async_trait]
impl JobSink for MarkdownReportSink {
    fn sink_name(&self) -> &str {
        "markdown-report"
    }

    async fn deliver(&self, jobs: &[Job]) -> Result<(), SinkError> {
        let report = render_markdown(jobs);
        match &self.path {
            Some(path) => {
                tokio::fs::write(path, &report).await?;
                info!("Wrote digest of {} postings to {}", jobs.len(), path.display());
            }
            None => info!("Digest:\n{}", report),
        }

        if let Some(html_path) = &self.html_path {
            let html = render_html(jobs);
            tokio::fs::write(html_path, &html).await?;
            info!("Wrote HTML digest to {}", html_path.display());
        }
        Ok(())
    }
}

pub fn render_markdown(jobs: &[Job]) -> String {
    if jobs.is_empty() {
        return "No jobs matching your criteria found today.".to_string();
    }

    let mut body = String::new();
    body.push_str("# Job Opportunities Found\n\n");
    body.push_str(&format!(
        "Found **{}** matching job(s) on {}\n\n---\n\n",
        jobs.len(),
        Utc::now().format("%Y-%m-%d")
    ));

    for (i, job) in jobs.iter().enumerate() {
        body.push_str(&format!("## {}. {}\n", i + 1, job.title));
        if let Some(company) = &job.company {
            body.push_str(&format!("**Company:** {}\n", company));
        }
        if let Some(location) = &job.location {
            body.push_str(&format!("**Location:** {}\n", location));
        }
        match job.salary_monthly_usd {
            Some(salary) => body.push_str(&format!("**Salary:** ${:.0}/month\n", salary)),
            None => body.push_str("**Salary:** not specified\n"),
        }
        body.push_str(&format!("**Source:** {}\n", job.source));
        if let Some(posted) = job.posted_at {
            body.push_str(&format!("**Posted:** {}\n", posted.format("%Y-%m-%d")));
        }
        if let Some(description) = &job.description {
            body.push_str(&format!("**Description:** {}...\n", description));
        }
        body.push_str(&format!("**Link:** {}\n\n---\n\n", job.url));
    }

    body
}

pub fn render_html(jobs: &[Job]) -> String {
    if jobs.is_empty() {
        return "<p>No jobs matching your criteria found today.</p>".to_string();
    }

    let mut html = String::new();
    html.push_str("<h1>Job Opportunities Found</h1>\n");
    html.push_str(&format!(
        "<p>Found <strong>{}</strong> matching job(s) on {}</p>\n<hr>\n",
        jobs.len(),
        Utc::now().format("%Y-%m-%d")
    ));

    for (i, job) in jobs.iter().enumerate() {
        html.push_str(&format!("<h2>{}. {}</h2>\n", i + 1, escape(&job.title)));
        if let Some(company) = &job.company {
            html.push_str(&format!("<p><strong>Company:</strong> {}</p>\n", escape(company)));
        }
        if let Some(location) = &job.location {
            html.push_str(&format!("<p><strong>Location:</strong> {}</p>\n", escape(location)));
        }
        match job.salary_monthly_usd {
            Some(salary) => {
                html.push_str(&format!("<p><strong>Salary:</strong> ${:.0}/month</p>\n", salary))
            }
            None => html.push_str("<p><strong>Salary:</strong> not specified</p>\n"),
        }
        html.push_str(&format!("<p><strong>Source:</strong> {}</p>\n", escape(&job.source)));
        if let Some(description) = &job.description {
            html.push_str(&format!(
                "<p><strong>Description:</strong> {}...</p>\n",
                escape(description)
            ));
        }
        html.push_str(&format!(
            "<p><a href=\"{}\">View Full Job</a></p>\n<hr>\n",
            escape(&job.url)
        ));
    }

    html
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
