use regex::Regex;
use std::sync::OnceLock;
use url::Url;

const ANNUAL_SALARY_CUTOFF: f64 = 100_000.0;

/// Full-time hours in a month, for converting hourly quotes.
const HOURS_PER_MONTH: f64 = 173.0;

const HOURLY_MARKERS: &[&str] = &["/hour", "/hr", "per hour", "an hour", "hourly"];

/// Query parameters stripped during URL canonicalization. These carry
/// click-tracking state, not posting identity.
const TRACKING_PARAMS: &[&str] = &["gclid", "fbclid", "ref", "source"];

fn html_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").unwrap())
}

/// Strip HTML tags and collapse runs of whitespace. Returns None when nothing
/// readable remains.
pub fn clean_text(text: &str) -> Option<String> {
    let stripped = html_tag_re().replace_all(text, " ");
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// Truncate at a char boundary, for description excerpts.
pub fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Best-effort parse of a free-text salary quote into USD/month.
///
/// Takes the smallest number in the string, since ranges like "$4,000 -
/// $6,000" quote a floor. Hourly quotes are scaled by full-time hours and
/// anything above 100k is treated as an annual figure. Returns None for
/// unparsable quotes ("competitive", "Not specified"); under a positive
/// salary floor such postings are excluded rather than waved through.
pub fn parse_monthly_salary(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(['$', ','], "");
    let numbers: Vec<f64> = cleaned
        .split(|c: char| !c.is_ascii_digit() && c != '.')
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<f64>().ok())
        .filter(|n| n.is_finite() && *n > 0.0)
        .collect();

    let min = numbers.into_iter().fold(f64::INFINITY, f64::min);
    if !min.is_finite() {
        return None;
    }

    let lowered = raw.to_lowercase();
    if HOURLY_MARKERS.iter().any(|m| lowered.contains(m)) {
        return Some(min * HOURS_PER_MONTH);
    }
    Some(monthly_from_quote(min))
}

/// Normalize a numeric quote to monthly: figures above the annual cutoff are
/// divided by 12, everything else is taken as already-monthly.
pub fn monthly_from_quote(amount: f64) -> f64 {
    if amount > ANNUAL_SALARY_CUTOFF {
        amount / 12.0
    } else {
        amount
    }
}

/// Canonical form of a posting URL, used as the primary dedup key.
///
/// Lowercases scheme and host (the url crate does this on parse), drops the
/// fragment and tracking query parameters, and strips the trailing slash.
/// Unparsable inputs fall back to a trimmed lowercase of the raw string so
/// dedup still sees byte-equal duplicates.
pub fn normalize_url(raw: &str) -> String {
    let Ok(mut parsed) = Url::parse(raw.trim()) else {
        return raw.trim().to_lowercase();
    };

    parsed.set_fragment(None);

    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(k, _)| !is_tracking_param(k))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    if kept.is_empty() {
        parsed.set_query(None);
    } else {
        let query = kept
            .iter()
            .map(|(k, v)| {
                if v.is_empty() {
                    k.clone()
                } else {
                    format!("{}={}", k, v)
                }
            })
            .collect::<Vec<_>>()
            .join("&");
        parsed.set_query(Some(&query));
    }

    let mut out = parsed.to_string();
    while out.ends_with('/') {
        out.pop();
    }
    out
}

fn is_tracking_param(key: &str) -> bool {
    key.starts_with("utm_") || TRACKING_PARAMS.contains(&key)
}

/// Resolve a possibly-relative link against the endpoint it came from.
pub fn absolutize_url(base: &Url, link: &str) -> Option<String> {
    let link = link.trim();
    if link.is_empty() {
        return None;
    }
    match Url::parse(link) {
        Ok(absolute) => Some(absolute.to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            base.join(link).ok().map(|u| u.to_string())
        }
        Err(_) => None,
    }
}
