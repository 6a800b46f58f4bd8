//! Report download handler

use axum::{body::Bytes, http::header, response::IntoResponse};
use serde_json::Value;

use crate::services::ReportService;

/// Download a plain-text report for the supplied results.
///
/// Never fails: an unreadable body renders a report of placeholders.
pub async fn download_report(body: Bytes) -> impl IntoResponse {
    let body: Value = serde_json::from_slice(&body).unwrap_or_else(|err| {
        if !body.is_empty() {
            tracing::warn!("Unreadable report body, rendering placeholders: {}", err);
        }
        Value::Null
    });

    let file = ReportService::new().generate(body);

    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.filename),
            ),
        ],
        file.content,
    )
}
