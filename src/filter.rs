use crate::types::{FilterCriteria, Job};

/// Pure predicate over one Job and the configured criteria. Holds no state;
/// all matching is case-insensitive substring matching.
pub struct FilterEngine;

impl FilterEngine {
    /// A Job passes when its title matches one of the required titles, at
    /// least one keyword matches title or description (empty keyword list
    /// matches everything), and its salary clears the floor.
    ///
    /// A Job with unknown salary is rejected whenever the floor is above
    /// zero: the floor is a hard guarantee, and unverifiable postings do not
    /// satisfy it.
    pub fn accepts(job: &Job, criteria: &FilterCriteria) -> bool {
        Self::title_matches(job, criteria)
            && Self::keywords_match(job, criteria)
            && Self::salary_clears_floor(job, criteria)
    }

    fn title_matches(job: &Job, criteria: &FilterCriteria) -> bool {
        if criteria.required_titles.is_empty() {
            return true;
        }
        let title = job.title.to_lowercase();
        criteria.required_titles.iter().any(|t| title.contains(t))
    }

    fn keywords_match(job: &Job, criteria: &FilterCriteria) -> bool {
        if criteria.keywords.is_empty() {
            return true;
        }
        let title = job.title.to_lowercase();
        let description = job
            .description
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default();
        criteria
            .keywords
            .iter()
            .any(|kw| title.contains(kw) || description.contains(kw))
    }

    fn salary_clears_floor(job: &Job, criteria: &FilterCriteria) -> bool {
        if criteria.min_salary_monthly_usd <= 0.0 {
            return true;
        }
        match job.salary_monthly_usd {
            Some(salary) => salary >= criteria.min_salary_monthly_usd,
            None => false,
        }
    }
}
