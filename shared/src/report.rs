//! Plain-text analysis report
//!
//! Renders whatever the client supplies; anything missing or of the wrong
//! shape becomes a placeholder rather than an error.

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::models::ReportParams;

pub const REPORT_FILENAME: &str = "PaddyTrack_Report.txt";

const RULE: &str = "==================================================";
const LAND_COVER_LABELS: [&str; 4] = ["Paddy", "Water", "Urban", "Fallow Land"];

/// Render a scalar as text: strings verbatim, other values in JSON form
fn text_or(value: Option<&Value>, placeholder: &str) -> String {
    match value {
        None | Some(Value::Null) => placeholder.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

fn number_or_zero(value: Option<&Value>) -> f64 {
    value.and_then(Value::as_f64).unwrap_or(0.0)
}

/// `Paddy: 40.00%, Water: 20.00%, ...`
pub fn format_land_cover(land_cover: Option<&Value>) -> String {
    let values: Vec<f64> = match land_cover.and_then(Value::as_array) {
        Some(items) => items.iter().map(|item| number_or_zero(Some(item))).collect(),
        None => vec![0.0; LAND_COVER_LABELS.len()],
    };

    LAND_COVER_LABELS
        .iter()
        .zip(values)
        .map(|(label, value)| format!("{}: {:.2}%", label, value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the downloadable report
pub fn format_report(params: &ReportParams, generated_at: NaiveDateTime) -> String {
    let results = &params.results;
    let yield_data = results.get("yield");
    let health = results.get("health");
    let water = results.get("water");

    let yield_field = |key: &str| number_or_zero(yield_data.and_then(|y| y.get(key)));
    let range = yield_data.and_then(|y| y.get("range"));
    let range_bound = |index: usize| number_or_zero(range.and_then(|r| r.get(index)));

    let lines = [
        "PaddyTrack Report".to_string(),
        RULE.to_string(),
        format!("Date of Analysis: {}", generated_at.format("%Y-%m-%d %H:%M:%S")),
        String::new(),
        "--- 1. Analysis Parameters ---".to_string(),
        format!("Area of Interest (AOI): {}", text_or(Some(&params.aoi), "N/A")),
        format!(
            "Date Range:             {} to {}",
            text_or(Some(&params.start_date), "N/A"),
            text_or(Some(&params.end_date), "N/A")
        ),
        format!("Satellite Source:       {}", text_or(Some(&params.satellite), "N/A")),
        format!("Classification Model:   {}", text_or(Some(&params.model), "N/A")),
        String::new(),
        "--- 2. Classification Metrics ---".to_string(),
        format!("Accuracy:     {}%", text_or(results.get("accuracy"), "--")),
        format!("Kappa Score:  {}", text_or(results.get("kappa"), "--")),
        format!("Precision:    {}", text_or(results.get("precision"), "--")),
        format!("Recall:       {}", text_or(results.get("recall"), "--")),
        format!("F1-Score:     {}", text_or(results.get("f1score"), "--")),
        String::new(),
        "--- 3. Land Cover Distribution ---".to_string(),
        format!("Distribution: {}", format_land_cover(results.get("landCover"))),
        String::new(),
        "--- 4. Yield Estimation ---".to_string(),
        format!("Estimated Yield: {:.2} t/ha", yield_field("estimate")),
        format!(
            "Potential Range: {:.2} - {:.2} t/ha",
            range_bound(0),
            range_bound(1)
        ),
        format!("Regional Average: {:.2} t/ha", yield_field("regionalAvg")),
        format!(
            "Growth Stage:    {}",
            text_or(yield_data.and_then(|y| y.get("stage")), "N/A")
        ),
        String::new(),
        "--- 5. Crop Health & Water Management ---".to_string(),
        format!(
            "Pest & Disease Risk: {}% ({})",
            text_or(health.and_then(|h| h.get("riskLevel")), "0"),
            text_or(health.and_then(|h| h.get("riskValue")), "N/A")
        ),
        format!(
            "Water Recommendation: {}",
            text_or(water.and_then(|w| w.get("recommendation")), "N/A")
        ),
        format!(
            "ET Rate (Avg):       {} mm/day",
            text_or(water.and_then(|w| w.get("etRate")), "--")
        ),
        String::new(),
        RULE.to_string(),
    ];

    lines.join("\n")
}
