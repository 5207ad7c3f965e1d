//! Feedback — fit classification, role-gap classification, and candidate/HR narratives
//! derived from the score breakdown and rubric-vs-profile set differences.

pub mod templates;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::rubric::lowered;
use crate::models::{role_label, CandidateProfile, Rubric};
use crate::scoring::ScoreResult;

/// Minimum percentage-point lead over the runner-up for a "clear" recommendation.
const CLEAR_GAP_POINTS: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitLevel {
    Strong,
    Good,
    Borderline,
    Weak,
}

/// Whether the top two roles are clearly separated or close together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapKind {
    Clear,
    Hybrid,
}

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("Role '{0}' is not in the rubric")]
    UnknownRole(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateFeedback {
    pub role: String,
    pub fit_level: FitLevel,
    pub summary: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HrFeedback {
    pub role: String,
    pub fit_level: FitLevel,
    pub summary: String,
    pub recommendation: String,
    pub risks: Vec<String>,
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackBundle {
    pub gap_kind: GapKind,
    pub for_candidate: CandidateFeedback,
    pub for_hr: HrFeedback,
}

/// strong ≥ 70, good ≥ 55, borderline ≥ 40, else weak.
pub fn classify_fit(best_pct: f64) -> FitLevel {
    if best_pct >= 70.0 {
        FitLevel::Strong
    } else if best_pct >= 55.0 {
        FitLevel::Good
    } else if best_pct >= 40.0 {
        FitLevel::Borderline
    } else {
        FitLevel::Weak
    }
}

/// `ranked` must be sorted by percent descending.
pub fn classify_gap(ranked: &[(&str, f64)]) -> GapKind {
    match ranked {
        [first, second, ..] if first.1 - second.1 < CLEAR_GAP_POINTS => GapKind::Hybrid,
        _ => GapKind::Clear,
    }
}

/// Builds candidate and HR feedback for the recommended role.
pub fn build_feedback(
    best_role: &str,
    score_result: &ScoreResult,
    profile: &CandidateProfile,
    rubric: &Rubric,
) -> Result<FeedbackBundle, FeedbackError> {
    let role_rubric = rubric
        .get(best_role)
        .ok_or_else(|| FeedbackError::UnknownRole(best_role.to_string()))?;
    let best_pct = score_result.percent.get(best_role).copied().unwrap_or(0.0);
    let label = role_label(best_role);

    let ranked = score_result.ranked();
    let fit_level = classify_fit(best_pct);
    let gap_kind = classify_gap(&ranked);
    let runner_up = match gap_kind {
        GapKind::Hybrid => ranked
            .iter()
            .find(|(role, _)| *role != best_role)
            .map(|(role, _)| role_label(role)),
        GapKind::Clear => None,
    };

    let must_skills = as_set(&role_rubric.skills.must);
    let nice_skills = as_set(&role_rubric.skills.nice);
    let core_tools = as_set(&role_rubric.tools.core);
    let optional_tools = as_set(&role_rubric.tools.optional);
    let skills_have = as_set_lower(&profile.skills);
    let tools_have = as_set_lower(&profile.tools);

    let skills_strength = intersection(&must_skills, &skills_have);
    let missing_skills = difference(&must_skills, &skills_have);
    let tools_strength = intersection(&core_tools, &tools_have);
    let missing_tools = difference(&core_tools, &tools_have);
    let nice_covered = intersection(&nice_skills, &skills_have);
    let optional_covered = intersection(&optional_tools, &tools_have);

    let years = profile.experience_years;
    let experience_short = role_rubric
        .experience
        .preferred()
        .filter(|preferred| years < *preferred);

    // Candidate
    let mut summary = templates::candidate_summary(fit_level, &label, best_pct);
    if let Some(second) = &runner_up {
        summary.push_str(&templates::candidate_hybrid(second));
    }

    let mut strengths = Vec::new();
    if !skills_strength.is_empty() {
        strengths.push(templates::strength_core_skills(&skills_strength));
    }
    if !tools_strength.is_empty() {
        strengths.push(templates::strength_core_tools(&tools_strength));
    }
    if !nice_covered.is_empty() || !optional_covered.is_empty() {
        strengths.push(templates::strength_extras(&nice_covered, &optional_covered));
    }

    let mut improvements = Vec::new();
    if !missing_skills.is_empty() {
        improvements.push(templates::improve_missing_skills(&missing_skills));
    }
    if !missing_tools.is_empty() {
        improvements.push(templates::improve_missing_tools(&missing_tools));
    }
    if let Some(preferred) = experience_short {
        improvements.push(templates::improve_experience(years, preferred));
    }
    if profile.education_level.is_below_degree() {
        improvements.push(templates::IMPROVE_EDUCATION.to_string());
    }
    if improvements.is_empty() {
        improvements.push(templates::IMPROVE_DEFAULT.to_string());
    }

    // HR
    let mut hr_summary = templates::hr_summary(&label, best_pct);
    if let Some(second) = &runner_up {
        hr_summary.push_str(&templates::hr_hybrid(second));
    }

    let mut risks = Vec::new();
    if !missing_skills.is_empty() {
        risks.push(templates::risk_missing_skills(&missing_skills));
    }
    if !missing_tools.is_empty() {
        risks.push(templates::risk_missing_tools(&missing_tools));
    }
    if let Some(preferred) = experience_short {
        risks.push(templates::risk_experience(years, preferred));
    }

    Ok(FeedbackBundle {
        gap_kind,
        for_candidate: CandidateFeedback {
            role: label.clone(),
            fit_level,
            summary,
            strengths,
            improvements,
            suggestions: to_strings(templates::CANDIDATE_SUGGESTIONS),
        },
        for_hr: HrFeedback {
            role: label,
            fit_level,
            summary: hr_summary,
            recommendation: templates::hr_recommendation(fit_level).to_string(),
            risks,
            questions: to_strings(templates::HR_QUESTIONS),
        },
    })
}

fn as_set(items: &[String]) -> BTreeSet<String> {
    lowered(items).into_iter().collect()
}

fn as_set_lower(items: &BTreeSet<String>) -> BTreeSet<String> {
    items.iter().map(|s| s.to_lowercase()).collect()
}

fn intersection(a: &BTreeSet<String>, b: &BTreeSet<String>) -> Vec<String> {
    a.intersection(b).cloned().collect()
}

fn difference(a: &BTreeSet<String>, b: &BTreeSet<String>) -> Vec<String> {
    a.difference(b).cloned().collect()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
