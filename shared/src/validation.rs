//! Validation utilities for analysis input

use chrono::NaiveDate;

use crate::models::AnalysisRequest;

pub const MISSING_PARAMETERS_MESSAGE: &str = "Missing required analysis parameters.";
pub const INVALID_DATE_MESSAGE: &str = "Invalid date format.";

/// Run-analysis parameters after presence checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisParams<'a> {
    pub date_start: &'a str,
    pub date_end: &'a str,
    pub study_area: &'a str,
    pub model: &'a str,
}

/// Require every run-analysis field to be present.
/// Values are not inspected here; dates are checked during synthesis.
pub fn validate_analysis_request(
    request: &AnalysisRequest,
) -> Result<AnalysisParams<'_>, &'static str> {
    match (
        request.date_start.as_deref(),
        request.date_end.as_deref(),
        request.study_area.as_deref(),
        request.model.as_deref(),
    ) {
        (Some(date_start), Some(date_end), Some(study_area), Some(model)) => Ok(AnalysisParams {
            date_start,
            date_end,
            study_area,
            model,
        }),
        _ => Err(MISSING_PARAMETERS_MESSAGE),
    }
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, &'static str> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| INVALID_DATE_MESSAGE)
}
