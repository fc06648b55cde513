use job_radar::sinks::report::{render_html, render_markdown};
use job_radar::{Job, JobSink, MarkdownReportSink};
use std::env;
use std::path::PathBuf;

fn job(title: &str, company: &str, url: &str) -> Job {
    Job {
        title: title.to_string(),
        company: Some(company.to_string()),
        location: Some("Remote".to_string()),
        salary_monthly_usd: Some(4500.0),
        description: Some("Building AI systems".to_string()),
        url: url.to_string(),
        source: "test".to_string(),
        posted_at: None,
    }
}

#[test]
fn markdown_digest_numbers_postings_and_reports_empty_runs() {
    assert_eq!(
        render_markdown(&[]),
        "No jobs matching your criteria found today."
    );

    let jobs = vec![
        job("Engineer A", "Acme", "https://a.com/1"),
        job("Engineer B", "Beta", "https://b.com/2"),
    ];
    let body = render_markdown(&jobs);
    assert!(body.contains("Found **2** matching job(s)"));
    assert!(body.contains("## 1. Engineer A"));
    assert!(body.contains("## 2. Engineer B"));
    assert!(body.contains("**Salary:** $4500/month"));
    assert!(body.contains("**Link:** https://a.com/1"));
}

#[test]
fn html_digest_escapes_markup_in_posting_fields() {
    let jobs = vec![job(
        "Engineer <script>alert(1)</script>",
        "R&D \"Labs\"",
        "https://a.com/1?x=1&y=2",
    )];
    let html = render_html(&jobs);

    assert!(html.contains("Engineer &lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("R&amp;D &quot;Labs&quot;"));
    assert!(html.contains("href=\"https://a.com/1?x=1&amp;y=2\""));
    assert!(!html.contains("<script>"));

    assert_eq!(
        render_html(&[]),
        "<p>No jobs matching your criteria found today.</p>"
    );
}

#[tokio::test]
async fn report_sink_writes_markdown_and_html_files() {
    let dir = env::temp_dir();
    let md_path: PathBuf = dir.join("job_radar_report_test.md");
    let html_path: PathBuf = dir.join("job_radar_report_test.html");

    let sink = MarkdownReportSink::new(Some(md_path.clone())).with_html(Some(html_path.clone()));
    let jobs = vec![job("Engineer", "Acme", "https://a.com/1")];
    sink.deliver(&jobs).await.unwrap();

    let markdown = tokio::fs::read_to_string(&md_path).await.unwrap();
    assert!(markdown.contains("## 1. Engineer"));

    let html = tokio::fs::read_to_string(&html_path).await.unwrap();
    assert!(html.contains("<h2>1. Engineer</h2>"));

    tokio::fs::remove_file(&md_path).await.ok();
    tokio::fs::remove_file(&html_path).await.ok();
}
