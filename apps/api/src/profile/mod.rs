// Profile extraction: section segmentation, rule-based field extractors, profile assembly.
// Every extractor is a pure function of one zone's text plus rubric vocabulary.

pub mod education;
pub mod experience;
pub mod name;
pub mod sections;
pub mod vocabulary;

use tracing::{debug, warn};

use crate::models::{CandidateProfile, Rubric};
use crate::profile::education::{
    extract_education_level, extract_education_majors, extract_institutions,
};
use crate::profile::experience::{current_year, estimate_experience_years, extract_experience_roles};
use crate::profile::name::extract_name;
use crate::profile::sections::{segment, Zone};
use crate::profile::vocabulary::{find_phrases, normalize, Vocabulary};

/// Builds a candidate profile from raw résumé text, measuring open date ranges up to this year.
pub fn build_profile(raw_text: &str, rubric: &Rubric) -> CandidateProfile {
    build_profile_as_of(raw_text, rubric, current_year())
}

/// Same as [`build_profile`] with an explicit "present" year.
pub fn build_profile_as_of(raw_text: &str, rubric: &Rubric, current_year: i32) -> CandidateProfile {
    let segmented = segment(raw_text);
    if segmented.is_unsectioned() && !raw_text.trim().is_empty() {
        warn!("No section headers recognised; all content filed under 'other'");
    }

    let vocab = Vocabulary::collect(rubric);

    let skills_text = normalize(segmented.get(Zone::Skills));
    let experience_text = segmented.get(Zone::Experience);
    let education_text = segmented.get(Zone::Education);

    let profile = CandidateProfile {
        name: extract_name(raw_text),
        skills: find_phrases(&skills_text, &vocab.skills),
        tools: find_phrases(&skills_text, &vocab.tools),
        projects: find_phrases(&normalize(segmented.get(Zone::Projects)), &vocab.projects),
        certifications: find_phrases(
            &normalize(segmented.get(Zone::Certifications)),
            &vocab.certifications,
        ),
        experience_years: estimate_experience_years(experience_text, current_year),
        experience_roles: extract_experience_roles(experience_text, &vocab.roles),
        education_level: extract_education_level(education_text),
        education_majors: extract_education_majors(education_text, &vocab.majors),
        education_institution: extract_institutions(education_text),
    };

    debug!(
        skills = profile.skills.len(),
        tools = profile.tools.len(),
        projects = profile.projects.len(),
        certifications = profile.certifications.len(),
        experience_years = profile.experience_years,
        education_level = profile.education_level.as_str(),
        "Profile extracted"
    );

    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EducationLevel;

    pub(crate) const SAMPLE_CV: &str = "Rina Wulandari
rina@example.com | +62 812 0000 1111
Summary
Analytical data professional.
Work Experience
Data Analyst, PT Maju Jaya 2021 - 2023
Built Tableau dashboards and automated SQL reports.
Data Science Intern, Startup Co 2020
Education
Universitas Indonesia
Bachelor of Statistics
Skills
Python, SQL, Excel, Tableau, Power BI, Machine Learning
Projects
Customer churn prediction and a sales dashboard
Certifications
Google Data Analytics Professional Certificate
";

    fn rubric() -> Rubric {
        serde_json::from_str(
            r#"{
                "data_analyst": {
                    "skills": {"must": ["SQL", "Excel", "Python"], "nice": ["Statistics"]},
                    "tools": {"core": ["Tableau", "Power BI"], "optional": ["Looker"]},
                    "experience": {"preferred_years": 1, "roles": ["data analyst"]},
                    "education": {"preferred_majors": ["Statistics"], "min_level": "S1"},
                    "signals": {"projects": ["dashboard"], "certifications": ["Google Data Analytics"]},
                    "weights": {"skills_must": 0.4, "skills_nice": 0.2, "experience": 0.2, "education": 0.1, "signals": 0.1}
                },
                "data_scientist": {
                    "skills": {"must": ["Python", "Machine Learning"], "nice": ["Deep Learning"]},
                    "tools": {"core": ["scikit-learn"]},
                    "experience": {"preferred_years": 2, "roles": ["data scientist"]},
                    "education": {"preferred_majors": ["Computer Science"], "optional_majors": ["Statistics"]},
                    "signals": {"projects": ["churn", "prediction"]},
                    "weights": {"skills_must": 0.4, "skills_nice": 0.2, "experience": 0.2, "education": 0.1, "signals": 0.1}
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_build_profile_full_cv() {
        let profile = build_profile_as_of(SAMPLE_CV, &rubric(), 2026);

        assert_eq!(profile.name, "Rina Wulandari");
        let skills: Vec<&str> = profile.skills.iter().map(String::as_str).collect();
        assert_eq!(skills, vec!["excel", "machine learning", "python", "sql"]);
        let tools: Vec<&str> = profile.tools.iter().map(String::as_str).collect();
        assert_eq!(tools, vec!["power bi", "tableau"]);
        assert!(profile.projects.contains("dashboard"));
        assert!(profile.projects.contains("churn"));
        assert!(profile.certifications.contains("google data analytics"));
        // 2021-2023 range (2.0) + bare 2020 with intern wording (0.5)
        assert_eq!(profile.experience_years, 2.5);
        assert!(profile.experience_roles.contains("data analyst"));
        assert_eq!(profile.education_level, EducationLevel::S1);
        assert!(profile.education_majors.contains("statistics"));
        assert_eq!(profile.education_institution, vec!["Universitas Indonesia"]);
    }

    #[test]
    fn test_build_profile_is_idempotent() {
        let rubric = rubric();
        let first = build_profile_as_of(SAMPLE_CV, &rubric, 2026);
        let second = build_profile_as_of(SAMPLE_CV, &rubric, 2026);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_text_yields_defaults() {
        let profile = build_profile_as_of("", &rubric(), 2026);
        assert_eq!(profile, CandidateProfile::default());
    }

    #[test]
    fn test_unsectioned_text_has_no_typed_evidence() {
        let profile = build_profile_as_of("python sql tableau 2019-2022 master", &rubric(), 2026);
        assert!(profile.skills.is_empty());
        assert_eq!(profile.experience_years, 0.0);
        assert_eq!(profile.education_level, EducationLevel::Unknown);
    }

    #[test]
    fn test_binary_garbage_degrades_gracefully() {
        let garbage = "\u{0}\u{1}\u{fffd}\u{fffd}%PDF-1.4 ÿØÿà";
        let profile = build_profile_as_of(garbage, &rubric(), 2026);
        assert!(profile.skills.is_empty());
        assert_eq!(profile.education_level, EducationLevel::Unknown);
    }
}
