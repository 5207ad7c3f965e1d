use std::sync::Arc;

use crate::config::Config;
use crate::models::Rubric;
use crate::scoring::ProfileScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Loaded once at startup; read-only afterwards.
    pub rubric: Arc<Rubric>,
    /// Pluggable scorer. Default: RubricScorer.
    pub scorer: Arc<dyn ProfileScorer>,
}
