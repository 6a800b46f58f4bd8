//! Metric synthesis tests
//!
//! Tests for the simulated analysis including:
//! - Determinism and date-order invariance
//! - Bounds on accuracy, health risk and dynamic factor
//! - Compatibility with previously published results

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use shared::synthesis::{dynamic_factor, MAX_ACCURACY};
use shared::{synthesize_metrics, GrowthStage, MetricsBundle, StressLevel, REGION_PROFILES};

fn date_string(days_from_epoch: i64) -> String {
    let base = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
    (base + Duration::days(days_from_epoch))
        .format("%Y-%m-%d")
        .to_string()
}

fn run(start: &str, end: &str, region: &str) -> MetricsBundle {
    synthesize_metrics(start, end, region).unwrap()
}

// ============================================================================
// Known Results
// ============================================================================

#[cfg(test)]
mod known_results {
    use super::*;

    #[test]
    fn test_punjab_optimal_season() {
        let bundle = run("2023-01-01", "2023-05-16", "punjab");

        assert_eq!(bundle.accuracy, "95.0");
        assert_eq!(bundle.kappa, "0.81");
        assert_eq!(bundle.precision, "0.86");
        assert_eq!(bundle.recall, "0.84");
        assert_eq!(bundle.f1_score, "0.85");
        assert_eq!(bundle.land_cover, [85.0, 15.0, 10.0, -10.0]);
        assert_eq!(bundle.ndvi, [0.7, 0.5, 0.4, 0.35, 0.28]);
        assert_eq!(bundle.yield_estimate.estimate, 10.086591993672968);
        assert_eq!(
            bundle.yield_estimate.range,
            [9.077932794305672, 11.095251193040266]
        );
        assert_eq!(bundle.yield_estimate.regional_avg, 6.8);
        assert_eq!(bundle.yield_estimate.stage, GrowthStage::End);
        assert_eq!(bundle.health.risk_level, 15);
        assert_eq!(bundle.health.risk_value, StressLevel::Low);
        assert_eq!(bundle.water.et_rate, "5.64");
        assert_eq!(
            bundle.water.soil_moisture,
            [0.53, 0.69, 0.66, 0.62, 0.68, 0.63, 0.51]
        );
    }

    #[test]
    fn test_west_bengal_late_season() {
        let bundle = run("2023-01-01", "2023-04-20", "west_bengal");

        assert_eq!(bundle.accuracy, "83.2");
        assert_eq!(bundle.kappa, "0.71");
        assert_eq!(bundle.land_cover, [58.5, 17.17, 10.0, 14.33]);
        assert_eq!(bundle.ndvi, [0.8, 0.65, 0.5, 0.45, 0.35]);
        assert_eq!(bundle.yield_estimate.estimate, 5.92227041686983);
        assert_eq!(bundle.yield_estimate.stage, GrowthStage::Late);
        assert_eq!(bundle.health.risk_level, 57);
        assert_eq!(bundle.health.risk_value, StressLevel::High);
        assert_eq!(bundle.water.et_rate, "5.51");
        assert_eq!(
            bundle.water.soil_moisture,
            [0.65, 0.66, 0.63, 0.5, 0.55, 0.57, 0.7]
        );
    }

    #[test]
    fn test_reversed_custom_area() {
        let bundle = run("2023-03-10", "2023-01-01", "drawn");

        assert_eq!(bundle.accuracy, "82.0");
        assert_eq!(bundle.kappa, "0.70");
        assert_eq!(bundle.land_cover, [45.0, 20.0, 10.0, 25.0]);
        assert_eq!(bundle.ndvi, [0.4, 0.65, 0.9, 0.84, 0.68]);
        assert_eq!(bundle.yield_estimate.estimate, 5.0);
        assert_eq!(bundle.yield_estimate.range, [4.5, 5.5]);
        assert_eq!(bundle.yield_estimate.stage, GrowthStage::Peak);
        assert_eq!(bundle.health.risk_level, 75);
        assert_eq!(bundle.water.et_rate, "5.39");
    }

    #[test]
    fn test_stage_boundaries() {
        let cases = [
            ("2023-01-01", "2023-02-19", GrowthStage::Early), // 49 days
            ("2023-01-01", "2023-02-20", GrowthStage::Peak),  // 50 days
            ("2023-01-01", "2023-04-10", GrowthStage::Peak),  // 99 days
            ("2023-01-01", "2023-04-11", GrowthStage::Late),  // 100 days
            ("2023-01-01", "2023-05-10", GrowthStage::Late),  // 129 days
            ("2023-01-01", "2023-05-11", GrowthStage::End),   // 130 days
        ];
        for (start, end, stage) in cases {
            assert_eq!(run(start, end, "default").yield_estimate.stage, stage, "{start} -> {end}");
        }
    }

    #[test]
    fn test_json_shape() {
        let bundle = run("2023-01-01", "2023-05-16", "punjab");
        let json = serde_json::to_value(&bundle).unwrap();

        for key in [
            "accuracy", "kappa", "precision", "recall", "f1score", "landCover", "ndvi",
            "yield", "health", "water",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["yield"]["stage"], "Ripening/Harvesting (End)");
        assert_eq!(json["yield"]["regionalAvg"], 6.8);
        assert_eq!(json["health"]["riskLevel"], 15);
        assert_eq!(json["health"]["riskValue"], "Low Stress");
        assert_eq!(json["water"]["soilMoisture"].as_array().unwrap().len(), 7);
        assert_eq!(json["landCover"].as_array().unwrap().len(), 4);
        assert_eq!(json["ndvi"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_invalid_dates_rejected() {
        assert!(synthesize_metrics("2023-13-01", "2023-05-16", "punjab").is_err());
        assert!(synthesize_metrics("2023-01-01", "May 16 2023", "punjab").is_err());
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_same_input_same_output(
        start in 0i64..4000,
        span in 0i64..400,
        region in 0usize..REGION_PROFILES.len(),
    ) {
        let (a, b) = (date_string(start), date_string(start + span));
        let key = REGION_PROFILES[region].key;
        prop_assert_eq!(run(&a, &b, key), run(&a, &b, key));
    }

    #[test]
    fn prop_date_order_does_not_matter(
        start in 0i64..4000,
        span in 0i64..400,
        region in 0usize..REGION_PROFILES.len(),
    ) {
        let (a, b) = (date_string(start), date_string(start + span));
        let key = REGION_PROFILES[region].key;
        prop_assert_eq!(run(&a, &b, key), run(&b, &a, key));
    }

    #[test]
    fn prop_bounds_hold(
        start in 0i64..4000,
        span in 0i64..400,
        region in 0usize..REGION_PROFILES.len(),
    ) {
        let bundle = run(&date_string(start), &date_string(start + span), REGION_PROFILES[region].key);

        let accuracy: f64 = bundle.accuracy.parse().unwrap();
        prop_assert!(accuracy <= MAX_ACCURACY);
        prop_assert!(bundle.health.risk_level <= 80);
        prop_assert!(bundle.yield_estimate.range[0] <= bundle.yield_estimate.estimate);
        prop_assert!(bundle.yield_estimate.estimate <= bundle.yield_estimate.range[1]);
        for moisture in bundle.water.soil_moisture {
            prop_assert!((0.5..=0.7).contains(&moisture));
        }
    }

    #[test]
    fn prop_dynamic_factor_in_unit_interval(days in 0i64..100_000) {
        let factor = dynamic_factor(days);
        prop_assert!((0.0..=1.0).contains(&factor));
    }

    #[test]
    fn prop_unknown_region_matches_default(
        start in 0i64..4000,
        span in 0i64..400,
        region in "[a-z]{3,12}_custom",
    ) {
        let (a, b) = (date_string(start), date_string(start + span));
        prop_assert_eq!(run(&a, &b, &region), run(&a, &b, "default"));
    }
}
