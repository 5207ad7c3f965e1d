//! Axum route handlers for the Analysis API.

use std::path::Path;

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::pipeline::{analyze, AnalysisReport};
use crate::errors::AppError;
use crate::ingest::decode_document;
use crate::models::{role_label, CandidateProfile};
use crate::profile::build_profile;
use crate::state::AppState;

/// Multipart field carrying the uploaded CV.
pub const UPLOAD_FIELD: &str = "cvfile";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub raw_text: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: CandidateProfile,
}

#[derive(Debug, Serialize)]
pub struct RoleSummary {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub roles: Vec<RoleSummary>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/roles
///
/// Lists the roles in the loaded rubric, in declared order.
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RolesResponse> {
    let roles = state
        .rubric
        .keys()
        .map(|id| RoleSummary {
            id: id.to_string(),
            label: role_label(id),
        })
        .collect();
    Json(RolesResponse { roles })
}

/// POST /api/v1/profile/extract
///
/// Extracts the candidate profile only. Useful for previewing extraction before scoring.
pub async fn handle_extract_profile(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    require_text(&request.raw_text)?;
    let profile = build_profile(&request.raw_text, &state.rubric);
    Ok(Json(ProfileResponse { profile }))
}

/// POST /api/v1/analyze
///
/// Full pipeline over already-decoded text: profile → scores → recommendation → feedback.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    require_text(&request.raw_text)?;
    let report = analyze(&request.raw_text, &state.rubric, state.scorer.as_ref())?;
    Ok(Json(report))
}

/// POST /api/v1/analyze/upload
///
/// Multipart upload (`cvfile`, .pdf or .txt). Decodes the document, then runs the full pipeline.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(sanitize_file_name).unwrap_or_default();
        let bytes = field.bytes().await?;
        upload = Some((file_name, bytes));
        break;
    }

    let (file_name, bytes) = upload
        .ok_or_else(|| AppError::Validation(format!("No '{UPLOAD_FIELD}' file part in request")))?;
    if file_name.is_empty() {
        return Err(AppError::Validation("Please choose a file".to_string()));
    }

    info!(file_name = %file_name, size = bytes.len(), "CV uploaded");
    let raw_text = decode_document(&file_name, bytes.to_vec()).await?;

    let mut report = analyze(&raw_text, &state.rubric, state.scorer.as_ref())?;
    report.filename = Some(file_name);
    Ok(Json(report))
}

fn require_text(raw_text: &str) -> Result<(), AppError> {
    if raw_text.trim().is_empty() {
        return Err(AppError::Validation("raw_text cannot be empty".to_string()));
    }
    Ok(())
}

/// Keeps only the final path component of a client-supplied file name.
fn sanitize_file_name(name: &str) -> String {
    Path::new(name.trim())
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}
