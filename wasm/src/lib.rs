//! WebAssembly module for the PaddyTrack platform
//!
//! Provides client-side computation for:
//! - Offline analysis runs (same output as the backend)
//! - Report preview before download
//! - Growth stage lookup and region listing

use chrono::Local;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Run a simulated analysis and return the metrics bundle as JSON
#[wasm_bindgen]
pub fn run_analysis(date_start: &str, date_end: &str, study_area: &str) -> Result<String, JsValue> {
    let bundle = shared::synthesize_metrics(date_start, date_end, study_area)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&bundle)
        .map_err(|e| JsValue::from_str(&format!("Failed to encode results: {}", e)))
}

/// Render the text report for a download-report style JSON body
#[wasm_bindgen]
pub fn generate_report(params_json: &str) -> String {
    let body = serde_json::from_str(params_json).unwrap_or(serde_json::Value::Null);
    let params = ReportParams::from_value(body);
    shared::format_report(&params, Local::now().naive_local())
}

/// Run an analysis and render its report in one step, for previewing
/// before download
#[wasm_bindgen]
pub fn preview_report(
    date_start: &str,
    date_end: &str,
    study_area: &str,
    satellite: &str,
    model: &str,
) -> Result<String, JsValue> {
    let bundle = shared::synthesize_metrics(date_start, date_end, study_area)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let params =
        ReportParams::from_bundle(&bundle, study_area, date_start, date_end, satellite, model)
            .map_err(|e| JsValue::from_str(&format!("Failed to encode results: {}", e)))?;

    Ok(shared::format_report(&params, Local::now().naive_local()))
}

/// Growth stage label for a season length in days
#[wasm_bindgen]
pub fn growth_stage_for_days(days: i32) -> String {
    GrowthStage::from_days(i64::from(days)).label().to_string()
}

/// Compiled-in region profiles as JSON
#[wasm_bindgen]
pub fn list_regions() -> String {
    serde_json::to_string(REGION_PROFILES).unwrap_or_else(|_| "[]".to_string())
}

/// Log a message to the browser console
#[wasm_bindgen]
pub fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}
