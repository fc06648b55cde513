use job_radar::{Deduplicator, Job};

fn job(title: &str, company: Option<&str>, url: &str, salary: Option<f64>) -> Job {
    Job {
        title: title.to_string(),
        company: company.map(str::to_string),
        location: None,
        salary_monthly_usd: salary,
        description: None,
        url: url.to_string(),
        source: "test".to_string(),
        posted_at: None,
    }
}

#[test]
fn identical_urls_collapse_to_first_seen() {
    let input = vec![
        job("Engineer", Some("Acme"), "https://example.com/jobs/1", None),
        job("Engineer (mirror)", Some("Acme Corp"), "https://example.com/jobs/1", None),
        job("Other Role", Some("Beta"), "https://example.com/jobs/2", None),
    ];

    let result = Deduplicator::dedupe(input);
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].title, "Engineer");
    assert_eq!(result[1].title, "Other Role");
}

#[test]
fn url_normalization_ignores_case_trailing_slash_and_tracking() {
    let input = vec![
        job("Engineer", None, "https://Example.COM/jobs/1/", None),
        job("Engineer dup", None, "https://example.com/jobs/1?utm_source=feed&fbclid=xyz", None),
        job("Engineer kept", None, "https://example.com/jobs/1?page=2", None),
    ];

    let result = Deduplicator::dedupe(input);
    // The paginated URL differs by a real query parameter, so it survives.
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].title, "Engineer");
    assert_eq!(result[1].title, "Engineer kept");
}

#[test]
fn mirrored_posting_collapses_on_title_and_company() {
    let input = vec![
        job("Software Engineer", Some("Acme"), "https://boardone.com/1", None),
        job("software engineer", Some("ACME"), "https://boardtwo.com/999", None),
    ];

    let result = Deduplicator::dedupe(input);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].url, "https://boardone.com/1");
}

#[test]
fn missing_company_never_triggers_identity_collapse() {
    let input = vec![
        job("Software Engineer", None, "https://boardone.com/1", None),
        job("Software Engineer", None, "https://boardtwo.com/2", None),
    ];

    let result = Deduplicator::dedupe(input);
    assert_eq!(result.len(), 2);
}

#[test]
fn later_duplicate_salary_enriches_kept_record() {
    let a = job("Engineer", Some("Acme"), "https://example.com/jobs/1", None);
    let b = job("Engineer", Some("Acme"), "https://example.com/jobs/1", Some(5000.0));

    let result = Deduplicator::dedupe(vec![a, b]);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "Engineer");
    assert_eq!(result[0].salary_monthly_usd, Some(5000.0));
}

#[test]
fn enrichment_never_overwrites_an_existing_salary() {
    let a = job("Engineer", Some("Acme"), "https://example.com/jobs/1", Some(4500.0));
    let b = job("Engineer", Some("Acme"), "https://example.com/jobs/1", Some(9000.0));

    let result = Deduplicator::dedupe(vec![a, b]);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].salary_monthly_usd, Some(4500.0));
}

#[test]
fn dedupe_is_idempotent() {
    let input = vec![
        job("Engineer", Some("Acme"), "https://example.com/jobs/1", None),
        job("Engineer", Some("Acme"), "https://mirror.com/55", Some(5000.0)),
        job("Other", Some("Beta"), "https://example.com/jobs/2", None),
        job("Other", None, "https://example.com/jobs/2/", Some(1.0)),
    ];

    let once = Deduplicator::dedupe(input);
    let twice = Deduplicator::dedupe(once.clone());

    assert_eq!(once.len(), twice.len());
    for (a, b) in once.iter().zip(twice.iter()) {
        assert_eq!(a.url, b.url);
        assert_eq!(a.title, b.title);
        assert_eq!(a.salary_monthly_usd, b.salary_monthly_usd);
    }
}

#[test]
fn transitive_duplicates_collapse_onto_the_original() {
    // C matches B by URL, and B already collapsed onto A by identity.
    let a = job("Engineer", Some("Acme"), "https://boardone.com/1", None);
    let b = job("Engineer", Some("Acme"), "https://boardtwo.com/2", None);
    let c = job("Engineer (repost)", None, "https://boardtwo.com/2", Some(6000.0));

    let result = Deduplicator::dedupe(vec![a, b, c]);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].url, "https://boardone.com/1");
    assert_eq!(result[0].salary_monthly_usd, Some(6000.0));
}
