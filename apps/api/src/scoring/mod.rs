//! Scoring — pluggable, trait-based scorer that measures a candidate profile against every role.
//!
//! Default: `RubricScorer` (weighted rule-based sub-scores, deterministic).
//!
//! `AppState` holds an `Arc<dyn ProfileScorer>`, chosen at startup.

pub mod recommend;
pub mod scorer;

pub use recommend::recommend_role;
pub use scorer::{score_candidate, ScoreResult};

use crate::models::{CandidateProfile, Rubric};

/// Implement this to swap scoring backends without touching the pipeline or handlers.
pub trait ProfileScorer: Send + Sync {
    fn score(&self, profile: &CandidateProfile, rubric: &Rubric) -> ScoreResult;

    /// Label reported alongside results, for transparency.
    fn backend(&self) -> &'static str;
}

/// Weighted rubric scorer. See [`scorer`] for the formulas.
pub struct RubricScorer;

impl ProfileScorer for RubricScorer {
    fn score(&self, profile: &CandidateProfile, rubric: &Rubric) -> ScoreResult {
        score_candidate(profile, rubric)
    }

    fn backend(&self) -> &'static str {
        "rubric"
    }
}
