//! Analysis service wrapping the metric synthesizer

use shared::synthesis::synthesize_for_range;
use shared::{
    validate_analysis_request, AnalysisRequest, DateRange, MetricsBundle, RegionProfile,
    SynthesisError,
};

use crate::error::{AppError, AppResult};

/// Analysis service for simulated paddy monitoring runs
#[derive(Clone, Default)]
pub struct AnalysisService;

impl AnalysisService {
    pub fn new() -> Self {
        Self
    }

    /// Validate the request and synthesize metrics for it
    pub fn run(&self, request: &AnalysisRequest) -> AppResult<MetricsBundle> {
        let params =
            validate_analysis_request(request).map_err(|_| AppError::MissingParameters)?;

        let range = DateRange::parse(params.date_start, params.date_end)
            .map_err(SynthesisError::InvalidDate)?;
        let profile = RegionProfile::resolve(params.study_area);

        tracing::debug!(
            study_area = params.study_area,
            region_profile = profile.key,
            model = params.model,
            diff_days = range.elapsed_days(),
            "Running analysis"
        );

        let bundle = synthesize_for_range(&range, profile);

        tracing::info!(
            study_area = params.study_area,
            stage = %bundle.yield_estimate.stage,
            risk = %bundle.health.risk_value,
            "Analysis completed"
        );

        Ok(bundle)
    }
}
