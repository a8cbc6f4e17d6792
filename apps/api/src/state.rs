use std::sync::Arc;

use sqlx::PgPool;

use crate::ats::guard::AnalysisGuard;
use crate::ats::narrative::NarrativeSource;
use crate::jobs::JobSearchClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable narrative backend. Default: LlmNarrator.
    pub narrator: Arc<dyn NarrativeSource>,
    pub jobs: JobSearchClient,
    /// Resumes with an analysis in flight.
    pub analyses: AnalysisGuard,
}
