//! Analysis request and synthesized metrics models

use serde::{Deserialize, Serialize};

/// Parameters of a run-analysis request.
///
/// Every field is optional on the wire so that absence can be reported as a
/// single "missing parameters" error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub date_start: Option<String>,
    pub date_end: Option<String>,
    pub study_area: Option<String>,
    /// Classification model name, echoed but not used in computation
    pub model: Option<String>,
}

/// Crop phenology bucket derived from the season length
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GrowthStage {
    #[serde(rename = "Transplanting/Vegetative (Early)")]
    Early,
    #[serde(rename = "Active Tillering/Panicle Initiation (Peak)")]
    Peak,
    #[serde(rename = "Flowering/Grain Filling (Late)")]
    Late,
    #[serde(rename = "Ripening/Harvesting (End)")]
    End,
}

impl GrowthStage {
    pub fn from_days(diff_days: i64) -> Self {
        if diff_days < 50 {
            GrowthStage::Early
        } else if diff_days < 100 {
            GrowthStage::Peak
        } else if diff_days < 130 {
            GrowthStage::Late
        } else {
            GrowthStage::End
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GrowthStage::Early => "Transplanting/Vegetative (Early)",
            GrowthStage::Peak => "Active Tillering/Panicle Initiation (Peak)",
            GrowthStage::Late => "Flowering/Grain Filling (Late)",
            GrowthStage::End => "Ripening/Harvesting (End)",
        }
    }

    /// Five-point NDVI curve for this stage, perturbed by the date seed
    pub fn ndvi_curve(&self, date_seed: f64) -> [f64; 5] {
        match self {
            GrowthStage::Early => [
                0.3,
                0.45,
                0.6,
                0.7 + date_seed * 0.1,
                0.72 + date_seed * 0.05,
            ],
            GrowthStage::Peak => [
                0.4,
                0.65,
                0.85 + date_seed * 0.05,
                0.8 + date_seed * 0.04,
                0.7 - date_seed * 0.02,
            ],
            GrowthStage::Late => [
                0.75 + date_seed * 0.05,
                0.65,
                0.5,
                0.45,
                0.4 - date_seed * 0.05,
            ],
            GrowthStage::End => [0.7, 0.5, 0.4, 0.35, 0.3 - date_seed * 0.02],
        }
    }
}

impl std::fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative crop stress level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StressLevel {
    #[serde(rename = "High Stress")]
    High,
    #[serde(rename = "Moderate Stress")]
    Moderate,
    #[serde(rename = "Low Stress")]
    Low,
}

impl StressLevel {
    pub fn from_dynamic_factor(dynamic_factor: f64) -> Self {
        if dynamic_factor < 0.6 {
            StressLevel::High
        } else if dynamic_factor < 0.85 {
            StressLevel::Moderate
        } else {
            StressLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StressLevel::High => "High Stress",
            StressLevel::Moderate => "Moderate Stress",
            StressLevel::Low => "Low Stress",
        }
    }

    pub fn water_recommendation(&self) -> &'static str {
        match self {
            StressLevel::High => {
                "Severe stress detected. Immediate water and nutrient assessment needed."
            }
            StressLevel::Moderate => {
                "Monitor water levels closely. Consider supplemental irrigation."
            }
            StressLevel::Low => "Optimal growth confirmed. Maintain current standing water.",
        }
    }
}

impl std::fmt::Display for StressLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Synthesized analysis output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricsBundle {
    pub accuracy: String,
    pub kappa: String,
    pub precision: String,
    pub recall: String,
    #[serde(rename = "f1score")]
    pub f1_score: String,
    /// Paddy, water, urban, fallow (percent)
    pub land_cover: [f64; 4],
    pub ndvi: [f64; 5],
    #[serde(rename = "yield")]
    pub yield_estimate: YieldEstimate,
    pub health: CropHealth,
    pub water: WaterManagement,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YieldEstimate {
    /// t/ha
    pub estimate: f64,
    pub range: [f64; 2],
    pub regional_avg: f64,
    pub stage: GrowthStage,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CropHealth {
    /// Pest & disease risk in percent
    pub risk_level: i64,
    pub risk_value: StressLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WaterManagement {
    pub recommendation: String,
    /// Evapotranspiration, mm/day
    pub et_rate: String,
    pub soil_moisture: [f64; 7],
}
