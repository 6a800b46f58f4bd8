//! Route definitions for the PaddyTrack API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/regions", get(handlers::list_regions))
        .route("/run_analysis", post(handlers::run_analysis))
        .route("/download_report", post(handlers::download_report))
}
