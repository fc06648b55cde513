use crate::normalize::normalize_url;
use crate::types::Job;
use std::collections::HashMap;
use tracing::{debug, info};

/// Collapses semantically-identical Jobs fetched from different sources.
///
/// Two records are duplicates when their normalized URLs are equal, or when
/// their lowercased (title, company) pair is equal with both fields present.
/// The second rule catches the same posting mirrored under different URLs.
/// First-seen order is preserved; when a later duplicate carries a salary the
/// kept record lacks, the salary is copied onto the kept record.
pub struct Deduplicator;

impl Deduplicator {
    pub fn dedupe(jobs: Vec<Job>) -> Vec<Job> {
        let input_len = jobs.len();
        let mut kept: Vec<Job> = Vec::with_capacity(input_len);
        let mut by_url: HashMap<String, usize> = HashMap::new();
        let mut by_identity: HashMap<(String, String), usize> = HashMap::new();

        for job in jobs {
            let url_key = normalize_url(&job.url);
            let identity_key = identity_key(&job);

            let existing = by_url.get(&url_key).copied().or_else(|| {
                identity_key
                    .as_ref()
                    .and_then(|k| by_identity.get(k).copied())
            });

            match existing {
                Some(index) => {
                    debug!("Duplicate posting dropped: {} ({})", job.title, job.url);
                    enrich(&mut kept[index], &job);
                    // Index the duplicate's keys too, so a third variant
                    // matching either shape still collapses onto the original.
                    by_url.entry(url_key).or_insert(index);
                    if let Some(k) = identity_key {
                        by_identity.entry(k).or_insert(index);
                    }
                }
                None => {
                    let index = kept.len();
                    by_url.insert(url_key, index);
                    if let Some(k) = identity_key {
                        by_identity.insert(k, index);
                    }
                    kept.push(job);
                }
            }
        }

        let removed = input_len - kept.len();
        if removed > 0 {
            info!("Removed {} duplicate postings", removed);
        }
        kept
    }
}

fn identity_key(job: &Job) -> Option<(String, String)> {
    let company = job.company.as_deref()?.trim();
    let title = job.title.trim();
    if company.is_empty() || title.is_empty() {
        return None;
    }
    Some((title.to_lowercase(), company.to_lowercase()))
}

/// Copy salary from a discarded duplicate onto the kept record when the kept
/// one lacks it. Position and all other fields of the kept record stand.
fn enrich(kept: &mut Job, duplicate: &Job) {
    if kept.salary_monthly_usd.is_none() {
        if let Some(salary) = duplicate.salary_monthly_usd {
            debug!("Enriched {} with salary from duplicate", kept.url);
            kept.salary_monthly_usd = Some(salary);
        }
    }
}
