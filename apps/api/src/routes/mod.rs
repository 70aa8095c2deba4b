pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::coach::handlers as coach;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // AI coaching API
        .route("/api/v1/ai/advice", post(coach::handle_advice))
        .route("/api/v1/ai/chat", post(coach::handle_chat))
        .route("/api/v1/ai/resume", post(coach::handle_generate_resume))
        .route("/api/v1/ai/cover-letter", post(coach::handle_cover_letter))
        .route(
            "/api/v1/ai/linkedin-summary",
            post(coach::handle_linkedin_summary),
        )
        .route(
            "/api/v1/ai/mock-interview",
            post(coach::handle_mock_interview),
        )
        .route("/api/v1/ai/questions", post(coach::handle_generate_questions))
        .route(
            "/api/v1/ai/evaluate-answer",
            post(coach::handle_evaluate_answer),
        )
        .route(
            "/api/v1/ai/analyze-document",
            post(coach::handle_analyze_document),
        )
        // Job search API
        .route("/api/v1/jobs/search", get(jobs::handle_search))
        .route("/api/v1/jobs/remote", get(jobs::handle_search_remote))
        .with_state(state)
}
