//! Rubric-driven scorer — five sub-scores per role combined by the rubric's weights.
//!
//! | dimension      | formula                                                   |
//! |----------------|-----------------------------------------------------------|
//! | skills_must    | must-skill hit ratio                                      |
//! | skills_nice    | nice-skill hit ratio (weighted together with tools)       |
//! | tools          | 0.7 × core hit ratio + 0.3 × optional hit ratio           |
//! | experience     | min(years / preferred_years, 1)                           |
//! | education      | 0.7 × major score + 0.3 × level score                     |
//! | signals        | 0.6 × project hit ratio + 0.4 × certification hit ratio   |
//!
//! `total` is the raw weighted sum. It is not renormalised, so over-weighted rubrics can exceed 1.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::rubric::lowered;
use crate::models::{CandidateProfile, RoleMap, RoleRubric, Rubric};

const TOOLS_CORE_SHARE: f64 = 0.7;
const TOOLS_OPTIONAL_SHARE: f64 = 0.3;

const NICE_SKILLS_SHARE: f64 = 0.7;
const NICE_TOOLS_SHARE: f64 = 0.3;

const EDU_MAJOR_SHARE: f64 = 0.7;
const EDU_LEVEL_SHARE: f64 = 0.3;
const MAJOR_PREFERRED: f64 = 1.0;
const MAJOR_OPTIONAL: f64 = 0.6;
const MAJOR_BASELINE: f64 = 0.3;
const LEVEL_MET: f64 = 1.0;
const LEVEL_BELOW: f64 = 0.5;

const SIGNALS_PROJECT_SHARE: f64 = 0.6;
const SIGNALS_CERT_SHARE: f64 = 0.4;

/// Sub-score breakdown for one role, rounded to four decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total: f64,
    pub skills_must: f64,
    pub skills_nice: f64,
    pub tools: f64,
    pub experience: f64,
    pub education: f64,
    pub signals: f64,
}

/// Scores for every role in the rubric, in rubric order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub raw_scores: RoleMap<f64>,
    pub percent: RoleMap<f64>,
    pub details: RoleMap<ScoreBreakdown>,
}

impl ScoreResult {
    /// (role, percent) sorted by percent descending; equal scores keep rubric order.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.percent.iter().map(|(r, p)| (r, *p)).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

/// Scores a profile against every role in the rubric.
pub fn score_candidate(profile: &CandidateProfile, rubric: &Rubric) -> ScoreResult {
    let mut result = ScoreResult::default();

    for (role, role_rubric) in rubric.iter() {
        let breakdown = score_role(profile, role_rubric);
        let percent = round_to(breakdown.total * 100.0, 2);
        debug!(role, total = breakdown.total, percent, "Role scored");

        result.raw_scores.insert(role, breakdown.total);
        result.percent.insert(role, percent);
        result.details.insert(role, breakdown);
    }

    result
}

/// Scores a profile against a single role rubric.
pub fn score_role(profile: &CandidateProfile, rubric: &RoleRubric) -> ScoreBreakdown {
    let skills_must = hit_ratio(&rubric.skills.must, &profile.skills);
    let skills_nice = hit_ratio(&rubric.skills.nice, &profile.skills);
    let tools = TOOLS_CORE_SHARE * hit_ratio(&rubric.tools.core, &profile.tools)
        + TOOLS_OPTIONAL_SHARE * hit_ratio(&rubric.tools.optional, &profile.tools);
    let experience = score_experience(profile, rubric);
    let education = score_education(profile, rubric);
    let signals = SIGNALS_PROJECT_SHARE * hit_ratio(&rubric.signals.projects, &profile.projects)
        + SIGNALS_CERT_SHARE
            * hit_ratio(&rubric.signals.certifications, &profile.certifications);

    let combined_skills_nice = (skills_nice * NICE_SKILLS_SHARE + tools * NICE_TOOLS_SHARE).min(1.0);

    let w = &rubric.weights;
    let total = w.skills_must * skills_must
        + w.skills_nice * combined_skills_nice
        + w.experience * experience
        + w.education * education
        + w.signals * signals;

    ScoreBreakdown {
        total: round_to(total, 4),
        skills_must: round_to(skills_must, 4),
        skills_nice: round_to(skills_nice, 4),
        tools: round_to(tools, 4),
        experience: round_to(experience, 4),
        education: round_to(education, 4),
        signals: round_to(signals, 4),
    }
}

/// Share of rubric phrases present in `have`; 0 when the rubric list is empty.
fn hit_ratio(wanted: &[String], have: &BTreeSet<String>) -> f64 {
    let wanted = lowered(wanted);
    if wanted.is_empty() {
        return 0.0;
    }
    let have: BTreeSet<String> = have.iter().map(|s| s.to_lowercase()).collect();
    let hits = wanted.iter().filter(|w| have.contains(w.as_str())).count();
    hits as f64 / wanted.len() as f64
}

fn score_experience(profile: &CandidateProfile, rubric: &RoleRubric) -> f64 {
    // Unset or zero preference falls back to one year.
    let preferred = rubric.experience.preferred().unwrap_or(1.0);
    (profile.experience_years / preferred).clamp(0.0, 1.0)
}

fn score_education(profile: &CandidateProfile, rubric: &RoleRubric) -> f64 {
    let edu = &rubric.education;
    let majors = profile
        .education_majors
        .iter()
        .map(|m| m.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    let major_score = if lowered(&edu.preferred_majors)
        .iter()
        .any(|m| majors.contains(m.as_str()))
    {
        MAJOR_PREFERRED
    } else if lowered(&edu.optional_majors)
        .iter()
        .any(|m| majors.contains(m.as_str()))
    {
        MAJOR_OPTIONAL
    } else {
        MAJOR_BASELINE
    };

    let level_score = if profile.education_level.rank() >= edu.min_level_rank() {
        LEVEL_MET
    } else {
        LEVEL_BELOW
    };

    EDU_MAJOR_SHARE * major_score + EDU_LEVEL_SHARE * level_score
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rubric::Weights;
    use crate::models::EducationLevel;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn analyst_rubric() -> RoleRubric {
        serde_json::from_str(
            r#"{
                "skills": {"must": ["SQL", "Excel", "Python", "Statistics"], "nice": ["A/B Testing", "Storytelling"]},
                "tools": {"core": ["Tableau", "Power BI"], "optional": ["Looker"]},
                "experience": {"preferred_years": 2},
                "education": {"preferred_majors": ["Statistics"], "optional_majors": ["Economics"], "min_level": "S1"},
                "signals": {"projects": ["dashboard", "forecast"], "certifications": ["Google Data Analytics"]},
                "weights": {"skills_must": 0.4, "skills_nice": 0.2, "experience": 0.2, "education": 0.1, "signals": 0.1}
            }"#,
        )
        .unwrap()
    }

    fn profile() -> CandidateProfile {
        CandidateProfile {
            name: "Rina".to_string(),
            skills: set(&["sql", "excel", "storytelling"]),
            tools: set(&["tableau", "looker"]),
            projects: set(&["dashboard"]),
            certifications: set(&[]),
            experience_years: 1.0,
            experience_roles: set(&["data analyst"]),
            education_level: EducationLevel::S1,
            education_majors: set(&["economics"]),
            education_institution: vec![],
        }
    }

    #[test]
    fn test_sub_scores() {
        let b = score_role(&profile(), &analyst_rubric());
        assert_eq!(b.skills_must, 0.5);
        assert_eq!(b.skills_nice, 0.5);
        // 0.7 * 1/2 + 0.3 * 1/1
        assert_eq!(b.tools, 0.65);
        assert_eq!(b.experience, 0.5);
        // optional major (0.6) and level met (1.0)
        assert_eq!(b.education, round_to(0.7 * 0.6 + 0.3, 4));
        // 0.6 * 1/2 + 0.4 * 0
        assert_eq!(b.signals, 0.3);
    }

    #[test]
    fn test_total_is_weighted_sum() {
        let b = score_role(&profile(), &analyst_rubric());
        let combined_nice = (0.5 * 0.7 + 0.65 * 0.3_f64).min(1.0);
        let expected = 0.4 * 0.5 + 0.2 * combined_nice + 0.2 * 0.5 + 0.1 * (0.7 * 0.6 + 0.3) + 0.1 * 0.3;
        assert!(
            (b.total - round_to(expected, 4)).abs() < 1e-9,
            "total was {}, expected {}",
            b.total,
            expected
        );
    }

    #[test]
    fn test_empty_rubric_lists_contribute_zero() {
        let b = score_role(&profile(), &RoleRubric::default());
        assert_eq!(b.skills_must, 0.0);
        assert_eq!(b.skills_nice, 0.0);
        assert_eq!(b.tools, 0.0);
        assert_eq!(b.signals, 0.0);
        assert_eq!(b.total, 0.0);
    }

    #[test]
    fn test_experience_defaults_to_one_year() {
        let mut rubric = analyst_rubric();
        rubric.experience.preferred_years = None;
        assert_eq!(score_role(&profile(), &rubric).experience, 1.0);
        rubric.experience.preferred_years = Some(0.0);
        assert_eq!(score_role(&profile(), &rubric).experience, 1.0);
    }

    #[test]
    fn test_experience_is_capped() {
        let mut p = profile();
        p.experience_years = 8.0;
        assert_eq!(score_role(&p, &analyst_rubric()).experience, 1.0);
    }

    #[test]
    fn test_education_preferred_major_and_unknown_level() {
        let mut p = profile();
        p.education_majors = set(&["statistics"]);
        p.education_level = EducationLevel::Unknown;
        // 0.7 * 1.0 + 0.3 * 0.5
        assert_eq!(score_role(&p, &analyst_rubric()).education, 0.85);
    }

    #[test]
    fn test_education_baseline_major() {
        let mut p = profile();
        p.education_majors = set(&[]);
        // 0.7 * 0.3 + 0.3 * 1.0
        assert_eq!(score_role(&p, &analyst_rubric()).education, 0.51);
    }

    #[test]
    fn test_education_unset_min_level_means_s1() {
        let mut rubric = analyst_rubric();
        rubric.education.min_level = None;
        let mut p = profile();
        p.education_level = EducationLevel::D3;
        p.education_majors = set(&["statistics"]);
        assert_eq!(score_role(&p, &rubric).education, 0.85);
    }

    #[test]
    fn test_adding_must_skill_never_decreases_score() {
        let rubric = analyst_rubric();
        let mut p = profile();
        let before = score_role(&p, &rubric).skills_must;
        for skill in ["python", "statistics", "unrelated"] {
            p.skills.insert(skill.to_string());
            let after = score_role(&p, &rubric).skills_must;
            assert!(after >= before, "{skill}: {after} < {before}");
        }
        assert_eq!(score_role(&p, &rubric).skills_must, 1.0);
    }

    #[test]
    fn test_overweighted_total_is_not_clamped() {
        let mut rubric = analyst_rubric();
        rubric.weights = Weights {
            skills_must: 2.0,
            skills_nice: 0.0,
            experience: 0.0,
            education: 0.0,
            signals: 0.0,
        };
        let mut p = profile();
        p.skills = set(&["sql", "excel", "python", "statistics"]);
        assert_eq!(score_role(&p, &rubric).total, 2.0);
    }

    #[test]
    fn test_score_candidate_covers_every_role_in_order() {
        let mut rubric = Rubric::new();
        rubric.insert("data_scientist", RoleRubric::default());
        rubric.insert("data_analyst", analyst_rubric());
        rubric.insert("data_engineer", RoleRubric::default());

        let result = score_candidate(&profile(), &rubric);
        let expected: Vec<&str> = rubric.keys().collect();
        assert_eq!(result.raw_scores.keys().collect::<Vec<_>>(), expected);
        assert_eq!(result.percent.keys().collect::<Vec<_>>(), expected);
        assert_eq!(result.details.keys().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_percent_is_rounded_total_times_100() {
        let mut rubric = Rubric::new();
        rubric.insert("data_analyst", analyst_rubric());
        let result = score_candidate(&profile(), &rubric);
        for (role, raw) in result.raw_scores.iter() {
            assert_eq!(result.percent.get(role), Some(&round_to(raw * 100.0, 2)));
        }
    }

    #[test]
    fn test_zero_weights_score_zero() {
        let mut rubric = Rubric::new();
        let mut role = analyst_rubric();
        role.weights = Weights::default();
        rubric.insert("data_analyst", role.clone());
        rubric.insert("data_scientist", role);

        let result = score_candidate(&profile(), &rubric);
        assert!(result.raw_scores.values().all(|v| *v == 0.0));
        assert!(result.percent.values().all(|v| *v == 0.0));
    }

    #[test]
    fn test_rubric_lists_match_case_insensitively() {
        let mut rubric = analyst_rubric();
        rubric.skills.must = strings(&["SQL"]);
        assert_eq!(score_role(&profile(), &rubric).skills_must, 1.0);
    }

    #[test]
    fn test_ranked_is_stable_for_ties() {
        let mut result = ScoreResult::default();
        result.percent.insert("b", 50.0);
        result.percent.insert("a", 80.0);
        result.percent.insert("c", 80.0);
        let ranked: Vec<&str> = result.ranked().into_iter().map(|(r, _)| r).collect();
        assert_eq!(ranked, vec!["a", "c", "b"]);
    }
}
