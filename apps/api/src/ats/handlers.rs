//! Axum route handlers for the ATS API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::ats::narrative::analyze;
use crate::ats::report::AtsReport;
use crate::ats::store::{fetch_resume, record_ats_score};
use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StoredAnalysisRequest {
    pub user_id: Uuid,
}

/// POST /api/v1/ats/analyze
///
/// Scores a resume supplied inline. Nothing is persisted.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(resume): Json<ResumeRecord>,
) -> Result<Json<AtsReport>, AppError> {
    Ok(Json(analyze(&resume, state.narrator.as_ref()).await))
}

/// POST /api/v1/resumes/:id/analyze
///
/// Scores a stored resume and overwrites its `ats_score`. Rejects a second
/// request for the same resume while one is still running.
pub async fn handle_analyze_stored(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
    Json(request): Json<StoredAnalysisRequest>,
) -> Result<Json<AtsReport>, AppError> {
    let _permit = state.analyses.try_acquire(resume_id).ok_or_else(|| {
        AppError::Conflict(format!("Resume {resume_id} is already being analyzed"))
    })?;

    let row = fetch_resume(&state.db, request.user_id, resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    let resume: ResumeRecord = serde_json::from_value(row.data).map_err(|e| {
        AppError::Validation(format!("Stored resume {resume_id} is malformed: {e}"))
    })?;

    let report = analyze(&resume, state.narrator.as_ref()).await;

    record_ats_score(&state.db, request.user_id, resume_id, report.overall_score).await?;
    info!(%resume_id, score = report.overall_score, "ATS score recorded");

    Ok(Json(report))
}
