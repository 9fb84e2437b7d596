pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::interview::handlers as interview;
use crate::scorecard::handlers as scorecard;
use crate::state::AppState;

/// Résumé uploads can be larger than axum's default body limit.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Question session
        .route(
            "/api/v1/generate-questions",
            post(interview::handle_generate_questions),
        )
        .route(
            "/api/v1/profile-summary",
            post(interview::handle_profile_summary),
        )
        // Evaluation and scorecards
        .route("/api/v1/evaluate", post(scorecard::handle_evaluate))
        .route(
            "/api/v1/send-scorecard",
            post(scorecard::handle_send_scorecard),
        )
        // Admin
        .route("/api/v1/admin/results", get(scorecard::handle_list_results))
        .route(
            "/api/v1/admin/candidates",
            get(interview::handle_list_candidates),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
