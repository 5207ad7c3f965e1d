//! Analysis pipeline: raw text → profile → scores → recommendation → feedback.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::feedback::{build_feedback, FeedbackBundle, FeedbackError};
use crate::ingest::{clean_text, extract_keywords, DEFAULT_TOP_K};
use crate::models::{CandidateProfile, Rubric};
use crate::profile::build_profile;
use crate::scoring::{recommend_role, ProfileScorer, ScoreResult};

/// Everything produced for one résumé.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// `None` only when the rubric has no roles.
    pub best_role: Option<String>,
    pub profile: CandidateProfile,
    pub score_result: ScoreResult,
    pub feedback: Option<FeedbackBundle>,
    /// Most frequent content terms, for display only.
    pub keywords: Vec<String>,
    pub scorer_backend: String,
}

pub fn analyze(
    raw_text: &str,
    rubric: &Rubric,
    scorer: &dyn ProfileScorer,
) -> Result<AnalysisReport, FeedbackError> {
    let profile = build_profile(raw_text, rubric);
    let score_result = scorer.score(&profile, rubric);
    let best_role = recommend_role(&score_result).map(str::to_string);

    let feedback = best_role
        .as_deref()
        .map(|role| build_feedback(role, &score_result, &profile, rubric))
        .transpose()?;

    let keywords = extract_keywords(&clean_text(raw_text), DEFAULT_TOP_K);

    let report = AnalysisReport {
        analysis_id: Uuid::new_v4(),
        analyzed_at: Utc::now(),
        filename: None,
        best_role,
        profile,
        score_result,
        feedback,
        keywords,
        scorer_backend: scorer.backend().to_string(),
    };

    info!(
        analysis_id = %report.analysis_id,
        best_role = report.best_role.as_deref().unwrap_or("none"),
        best_percent = report
            .best_role
            .as_deref()
            .and_then(|r| report.score_result.percent.get(r))
            .copied()
            .unwrap_or(0.0),
        "Analysis complete"
    );

    Ok(report)
}
