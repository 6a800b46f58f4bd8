//! HTTP handler for simulated analysis runs

use axum::{extract::rejection::JsonRejection, Json};
use shared::{AnalysisRequest, MetricsBundle};

use crate::error::{AppError, AppResult};
use crate::services::AnalysisService;

/// Run an analysis for a date range and study area
pub async fn run_analysis(
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> AppResult<Json<MetricsBundle>> {
    let Json(request) =
        payload.map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;

    let service = AnalysisService::new();
    let bundle = service.run(&request)?;
    Ok(Json(bundle))
}
