// src/resumes/routes.rs

use axum::{routing::post, Router};

use super::handlers;

/// Create the resumes router with all resume-parsing routes
pub fn resumes_routes() -> Router {
    Router::new()
        .route("/api/resumes/parse", post(handlers::parse_resume_upload))
        .route(
            "/api/resumes/parse-text",
            post(handlers::parse_resume_text),
        )
}
