pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ats::handlers as ats;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS API
        .route("/api/v1/ats/analyze", post(ats::handle_analyze))
        .route(
            "/api/v1/resumes/:id/analyze",
            post(ats::handle_analyze_stored),
        )
        // Jobs API
        .route("/api/v1/jobs/search", get(jobs::handle_search_jobs))
        .with_state(state)
}
