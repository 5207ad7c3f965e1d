//! Education extraction: level tier, majors, institutions.

use std::collections::BTreeSet;

use crate::models::EducationLevel;
use crate::profile::vocabulary::{find_phrases, normalize};

/// Checked top-down; the first tier with any keyword present wins.
const LEVEL_KEYWORDS: &[(EducationLevel, &[&str])] = &[
    (
        EducationLevel::S3,
        &["s3", "phd", "ph.d", "doctor", "doktor"],
    ),
    (EducationLevel::S2, &["s2", "master", "magister"]),
    (EducationLevel::S1, &["s1", "bachelor", "sarjana"]),
    (EducationLevel::D3, &["d3", "diploma"]),
    (EducationLevel::Sma, &["sma", "smk", "high school"]),
];

const INSTITUTION_MARKERS: &[&str] = &[
    "university",
    "universitas",
    "institute",
    "institut",
    "polytechnic",
    "politeknik",
    "college",
    "school of",
    "sekolah tinggi",
    "academy",
    "akademi",
];

pub fn extract_education_level(education_text: &str) -> EducationLevel {
    let text = normalize(education_text);
    LEVEL_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(level, _)| *level)
        .unwrap_or(EducationLevel::Unknown)
}

/// Rubric majors (preferred and optional, all roles) mentioned in the education zone.
pub fn extract_education_majors(
    education_text: &str,
    majors: &BTreeSet<String>,
) -> BTreeSet<String> {
    find_phrases(&normalize(education_text), majors)
}

/// Lines naming an institution, first-seen order, exact duplicates dropped.
pub fn extract_institutions(education_text: &str) -> Vec<String> {
    let mut institutions: Vec<String> = Vec::new();
    for line in education_text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let lower = line.to_lowercase();
        if INSTITUTION_MARKERS.iter().any(|m| lower.contains(m))
            && !institutions.iter().any(|seen| seen == line)
        {
            institutions.push(line.to_string());
        }
    }
    institutions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_beats_bachelor() {
        let text = "Bachelor of Science, 2018\nMaster of Data Science, 2021";
        assert_eq!(extract_education_level(text), EducationLevel::S2);
    }

    #[test]
    fn test_each_tier() {
        assert_eq!(extract_education_level("PhD in Physics"), EducationLevel::S3);
        assert_eq!(extract_education_level("S1 Informatika"), EducationLevel::S1);
        assert_eq!(extract_education_level("Diploma of IT"), EducationLevel::D3);
        assert_eq!(extract_education_level("SMA Negeri 1"), EducationLevel::Sma);
    }

    #[test]
    fn test_unknown_when_no_keyword() {
        assert_eq!(extract_education_level(""), EducationLevel::Unknown);
        assert_eq!(extract_education_level("bootcamp graduate"), EducationLevel::Unknown);
    }

    #[test]
    fn test_majors_substring_match() {
        let majors: BTreeSet<String> = ["statistics", "computer science", "economics"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let found = extract_education_majors("Bachelor of Computer\nScience", &majors);
        let found: Vec<&str> = found.iter().map(String::as_str).collect();
        assert_eq!(found, vec!["computer science"]);
    }

    #[test]
    fn test_institutions_first_seen_order_dedup() {
        let text = "Universitas Gadjah Mada\nBachelor of Statistics\nInstitut Teknologi Bandung\nUniversitas Gadjah Mada\n";
        assert_eq!(
            extract_institutions(text),
            vec!["Universitas Gadjah Mada", "Institut Teknologi Bandung"]
        );
    }

    #[test]
    fn test_institutions_empty() {
        assert!(extract_institutions("").is_empty());
    }
}
