//! Rubric loading — reads and validates the role rubric JSON once at startup.

use std::path::Path;

use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::Rubric;

#[derive(Debug, Error)]
pub enum RubricError {
    #[error("Could not read rubric file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed rubric: {0}")]
    Malformed(String),

    #[error("Role '{role}' has an invalid weight for '{dimension}': {value}")]
    InvalidWeight {
        role: String,
        dimension: &'static str,
        value: f64,
    },
}

impl From<serde_json::Error> for RubricError {
    fn from(e: serde_json::Error) -> Self {
        RubricError::Malformed(e.to_string())
    }
}

/// Loads the rubric from a JSON file.
pub fn load_rubric(path: impl AsRef<Path>) -> Result<Rubric, RubricError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| RubricError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let rubric = parse_rubric(&raw)?;
    info!(
        path = %path.display(),
        roles = rubric.len(),
        "Rubric loaded"
    );
    Ok(rubric)
}

/// Parses rubric JSON: an object keyed by role id whose values are role objects.
pub fn parse_rubric(raw: &str) -> Result<Rubric, RubricError> {
    let value: Value = serde_json::from_str(raw)?;
    let roles = value.as_object().ok_or_else(|| {
        RubricError::Malformed("top level must be an object keyed by role id".to_string())
    })?;

    if let Some((role, _)) = roles.iter().find(|(_, v)| !v.is_object()) {
        return Err(RubricError::Malformed(format!("role '{role}' must be an object")));
    }

    // Re-parse from text so role order follows the document.
    let rubric: Rubric = serde_json::from_str(raw)?;

    for (role, role_rubric) in rubric.iter() {
        if let Some((dimension, value)) = role_rubric
            .weights
            .iter()
            .find(|(_, w)| !w.is_finite() || *w < 0.0)
        {
            return Err(RubricError::InvalidWeight {
                role: role.to_string(),
                dimension,
                value,
            });
        }
    }

    if rubric.is_empty() {
        warn!("Rubric defines no roles; no recommendation will be made");
    }
    Ok(rubric)
}
