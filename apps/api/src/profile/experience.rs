//! Experience extraction: years of experience from date ranges, and role titles.

use std::collections::{BTreeSet, HashSet};

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::profile::vocabulary::{find_phrases, normalize};

/// `2019-2021`, `2019 – 2021`, `2020 - present`. Hyphen or en-dash.
static YEAR_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{4})\s*[-–]\s*(\d{4}|present|current|now)\b").expect("year range regex")
});

static BARE_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b20\d{2}\b").expect("bare year regex"));

/// Per-range cap in years.
const MAX_RANGE_YEARS: f64 = 10.0;
/// Ranges are measured mid-year to mid-year.
const MID_YEAR: f64 = 0.5;

const INTERN_KEYWORDS: &[&str] = &["intern", "magang"];
const ROLE_KEYWORDS: &[&str] = &["data analyst", "data scientist", "data engineer"];

const INTERN_YEARS: f64 = 0.5;
const ROLE_YEARS: f64 = 1.0;
const GENERIC_YEAR: f64 = 0.5;

pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Estimates years of experience from the experience zone, evaluated as of `current_year`.
///
/// 1. Each year range adds `min(end - start, 10)`, never negative; open ranges end at
///    `current_year`.
/// 2. Each remaining bare `20xx` year not consumed by a range adds 0.5 (intern wording),
///    1.0 (data role wording) or 0.5 (anything else). This branch is not capped.
/// 3. With no dated evidence at all, intern wording gives 0.5 and role wording 1.0.
///
/// Rounded to two decimals.
pub fn estimate_experience_years(experience_text: &str, current_year: i32) -> f64 {
    let text = normalize(experience_text);
    let mut total = 0.0_f64;
    let mut used: HashSet<&str> = HashSet::new();

    for caps in YEAR_RANGE_RE.captures_iter(&text) {
        let (Some(start_m), Some(end_m)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let Ok(start_year) = start_m.as_str().parse::<i32>() else {
            continue;
        };
        used.insert(start_m.as_str());

        let end_year = match end_m.as_str().parse::<i32>() {
            Ok(year) => {
                used.insert(end_m.as_str());
                year
            }
            Err(_) => current_year,
        };

        let start = f64::from(start_year) + MID_YEAR;
        let end = f64::from(end_year) + MID_YEAR;
        let span = (end - start).clamp(0.0, MAX_RANGE_YEARS);
        debug!(start_year, end_year, span, "experience range");
        total += span;
    }

    let has_intern = INTERN_KEYWORDS.iter().any(|k| text.contains(k));
    let has_role = ROLE_KEYWORDS.iter().any(|k| text.contains(k));

    let bare_years = BARE_YEAR_RE
        .find_iter(&text)
        .filter(|m| !used.contains(m.as_str()))
        .count();
    let per_bare_year = if has_intern {
        INTERN_YEARS
    } else if has_role {
        ROLE_YEARS
    } else {
        GENERIC_YEAR
    };
    total += bare_years as f64 * per_bare_year;

    if total == 0.0 {
        total = if has_intern {
            INTERN_YEARS
        } else if has_role {
            ROLE_YEARS
        } else {
            0.0
        };
    }

    round2(total.max(0.0))
}

/// Role titles found in the experience zone.
///
/// Union of rubric role phrases found as substrings, and windows of up to four consecutive
/// capitalised tokens (e.g. "Senior Data Analyst") that contain one of those phrases. Windows
/// end on every token of a run, so long runs still yield the title at their tail. All lowercased.
pub fn extract_experience_roles(
    experience_text: &str,
    role_phrases: &BTreeSet<String>,
) -> BTreeSet<String> {
    let mut roles = find_phrases(&normalize(experience_text), role_phrases);
    if role_phrases.is_empty() {
        return roles;
    }

    for run in capitalized_runs(experience_text) {
        for end in 1..=run.len() {
            for start in end.saturating_sub(4)..end {
                let phrase = run[start..end].join(" ").to_lowercase();
                if role_phrases.iter().any(|r| phrase.contains(r.as_str())) {
                    roles.insert(phrase);
                }
            }
        }
    }
    roles
}

/// Consecutive capitalised tokens. Trailing punctuation such as a comma closes a run.
fn capitalized_runs(text: &str) -> Vec<Vec<&str>> {
    let mut runs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for token in text.split_whitespace() {
        let cleaned = token.trim_matches(|c: char| !c.is_alphanumeric());
        let capitalized = cleaned.chars().next().is_some_and(char::is_uppercase);

        if capitalized {
            current.push(cleaned);
            if token.ends_with(&[',', ';', ':', '|', ')', '('][..]) {
                runs.push(std::mem::take(&mut current));
            }
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
