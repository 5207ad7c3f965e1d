use serde::{Deserialize, Serialize};

use crate::models::profile::EducationLevel;
use crate::models::role_map::RoleMap;

/// Per-role rubrics keyed by role id, in declared order.
pub type Rubric = RoleMap<RoleRubric>;

/// Scoring configuration for a single role.
///
/// Every section defaults to empty so a partial rubric scores as "no evidence" instead of failing.
/// String lists are matched case-insensitively; see [`lowered`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleRubric {
    pub skills: SkillsRubric,
    pub tools: ToolsRubric,
    pub experience: ExperienceRubric,
    pub education: EducationRubric,
    pub signals: SignalsRubric,
    pub weights: Weights,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsRubric {
    pub must: Vec<String>,
    pub nice: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsRubric {
    pub core: Vec<String>,
    pub optional: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceRubric {
    #[serde(alias = "pref_years")]
    pub preferred_years: Option<f64>,
    /// Job-title phrases that count as relevant experience for this role.
    pub roles: Vec<String>,
}

impl ExperienceRubric {
    /// Preferred years when set to a usable (non-zero) value.
    pub fn preferred(&self) -> Option<f64> {
        self.preferred_years.filter(|y| *y != 0.0 && y.is_finite())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationRubric {
    pub preferred_majors: Vec<String>,
    pub optional_majors: Vec<String>,
    pub min_level: Option<String>,
}

impl EducationRubric {
    /// Rank of the minimum level; S1 when unset or unrecognised.
    pub fn min_level_rank(&self) -> i8 {
        self.min_level
            .as_deref()
            .and_then(EducationLevel::parse)
            .unwrap_or(EducationLevel::S1)
            .rank()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalsRubric {
    pub projects: Vec<String>,
    pub certifications: Vec<String>,
}

/// Linear coefficients for the five weighted dimensions. They are not required to sum to 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub skills_must: f64,
    pub skills_nice: f64,
    pub experience: f64,
    pub education: f64,
    pub signals: f64,
}

impl Weights {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("skills_must", self.skills_must),
            ("skills_nice", self.skills_nice),
            ("experience", self.experience),
            ("education", self.education),
            ("signals", self.signals),
        ]
        .into_iter()
    }
}

/// Trimmed, lowercased copy of a rubric list with blank phrases dropped.
pub fn lowered(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// "data_scientist" -> "Data Scientist"
pub fn role_label(role: &str) -> String {
    role.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
