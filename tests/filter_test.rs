use job_radar::{FilterCriteria, FilterEngine, Job};

fn job(title: &str, description: Option<&str>, salary: Option<f64>) -> Job {
    Job {
        title: title.to_string(),
        company: Some("Acme".to_string()),
        location: Some("Remote".to_string()),
        salary_monthly_usd: salary,
        description: description.map(str::to_string),
        url: "https://example.com/jobs/1".to_string(),
        source: "test".to_string(),
        posted_at: None,
    }
}

#[test]
fn rejects_salary_below_floor() {
    let criteria = FilterCriteria::new(4000.0, &["software engineer"], &[]);
    let below = job("Software Engineer", None, Some(3999.0));
    assert!(!FilterEngine::accepts(&below, &criteria));

    let at_floor = job("Software Engineer", None, Some(4000.0));
    assert!(FilterEngine::accepts(&at_floor, &criteria));
}

#[test]
fn rejects_unknown_salary_under_positive_floor() {
    let criteria = FilterCriteria::new(4000.0, &["software engineer"], &[]);
    let unknown = job("Software Engineer", None, None);
    assert!(!FilterEngine::accepts(&unknown, &criteria));
}

#[test]
fn accepts_unknown_salary_when_floor_disabled() {
    let criteria = FilterCriteria::new(0.0, &["software engineer"], &[]);
    let unknown = job("Software Engineer", None, None);
    assert!(FilterEngine::accepts(&unknown, &criteria));
}

#[test]
fn title_match_is_case_insensitive_substring() {
    let criteria = FilterCriteria::new(0.0, &["software engineer"], &[]);
    assert!(FilterEngine::accepts(
        &job("AI Software Engineer", None, None),
        &criteria
    ));
    assert!(FilterEngine::accepts(
        &job("Senior SOFTWARE ENGINEER", None, None),
        &criteria
    ));
    assert!(!FilterEngine::accepts(&job("Barista", None, None), &criteria));
}

#[test]
fn title_matches_any_of_several_criteria() {
    let criteria = FilterCriteria::new(0.0, &["software engineer", "data engineer"], &[]);
    assert!(FilterEngine::accepts(
        &job("Senior Data Engineer", None, None),
        &criteria
    ));
}

#[test]
fn empty_keyword_set_means_no_restriction() {
    let criteria = FilterCriteria::new(0.0, &["engineer"], &[]);
    assert!(FilterEngine::accepts(
        &job("Engineer", Some("nothing notable"), None),
        &criteria
    ));
}

#[test]
fn keywords_scan_title_and_description() {
    let criteria = FilterCriteria::new(0.0, &["engineer"], &["machine learning"]);

    let in_description = job("Engineer", Some("We do Machine Learning at scale"), None);
    assert!(FilterEngine::accepts(&in_description, &criteria));

    let in_title = job("Machine Learning Engineer", Some("backend work"), None);
    assert!(FilterEngine::accepts(&in_title, &criteria));

    let in_neither = job("Engineer", Some("plain backend work"), None);
    assert!(!FilterEngine::accepts(&in_neither, &criteria));

    let no_description = job("Engineer", None, None);
    assert!(!FilterEngine::accepts(&no_description, &criteria));
}

#[test]
fn criteria_terms_are_normalized_at_construction() {
    let criteria = FilterCriteria {
        min_salary_monthly_usd: 0.0,
        required_titles: FilterCriteria::parse_terms(" Software Engineer , , DATA ENGINEER "),
        keywords: FilterCriteria::parse_terms(""),
    };
    assert_eq!(
        criteria.required_titles,
        vec!["software engineer".to_string(), "data engineer".to_string()]
    );
    assert!(criteria.keywords.is_empty());
}
