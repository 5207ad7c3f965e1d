use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Highest completed education tier. `Unknown` ranks below every real tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "SMA")]
    Sma,
    D3,
    S1,
    S2,
    S3,
    #[default]
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl EducationLevel {
    /// SMA=0 .. S3=4, UNKNOWN=-1.
    pub fn rank(self) -> i8 {
        match self {
            EducationLevel::Sma => 0,
            EducationLevel::D3 => 1,
            EducationLevel::S1 => 2,
            EducationLevel::S2 => 3,
            EducationLevel::S3 => 4,
            EducationLevel::Unknown => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EducationLevel::Sma => "SMA",
            EducationLevel::D3 => "D3",
            EducationLevel::S1 => "S1",
            EducationLevel::S2 => "S2",
            EducationLevel::S3 => "S3",
            EducationLevel::Unknown => "UNKNOWN",
        }
    }

    /// Case-insensitive tier name lookup. "UNKNOWN" and anything unrecognised yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "SMA" => Some(EducationLevel::Sma),
            "D3" => Some(EducationLevel::D3),
            "S1" => Some(EducationLevel::S1),
            "S2" => Some(EducationLevel::S2),
            "S3" => Some(EducationLevel::S3),
            _ => None,
        }
    }

    /// Levels that warrant a "clarify your education section" hint.
    pub fn is_below_degree(self) -> bool {
        matches!(
            self,
            EducationLevel::Unknown | EducationLevel::Sma | EducationLevel::D3
        )
    }
}

/// Structured candidate signals extracted from one résumé.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub skills: BTreeSet<String>,
    pub tools: BTreeSet<String>,
    pub projects: BTreeSet<String>,
    pub certifications: BTreeSet<String>,
    pub experience_years: f64,
    pub experience_roles: BTreeSet<String>,
    pub education_level: EducationLevel,
    pub education_majors: BTreeSet<String>,
    /// First-seen order, duplicates removed.
    pub education_institution: Vec<String>,
}

impl Default for CandidateProfile {
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
            skills: BTreeSet::new(),
            tools: BTreeSet::new(),
            projects: BTreeSet::new(),
            certifications: BTreeSet::new(),
            experience_years: 0.0,
            experience_roles: BTreeSet::new(),
            education_level: EducationLevel::Unknown,
            education_majors: BTreeSet::new(),
            education_institution: Vec::new(),
        }
    }
}
