//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::jobs::{JobListing, JobQuery, JobSearchError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobSearchParams {
    pub query: String,
    pub location: Option<String>,
    pub page: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub jobs: Vec<JobListing>,
}

/// GET /api/v1/jobs/search?query=&location=&page=
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobSearchParams>,
) -> Result<Json<JobSearchResponse>, AppError> {
    if params.query.trim().is_empty() {
        return Err(AppError::Validation("query cannot be empty".to_string()));
    }

    let query = JobQuery {
        query: params.query,
        location: params.location,
        page: params.page.unwrap_or(1),
    };

    let jobs = state.jobs.search(&query).await.map_err(|e| match e {
        JobSearchError::NotConfigured => {
            AppError::Unavailable("Job search is not configured".to_string())
        }
        other => AppError::Upstream(format!("Job search failed: {other}")),
    })?;

    Ok(Json(JobSearchResponse { jobs }))
}
