//! Regional baseline profiles

use serde::Serialize;

/// Baseline parameters for a study area before seasonal adjustment
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegionProfile {
    pub key: &'static str,
    /// Average yield in t/ha
    pub base_yield_avg: f64,
    pub yield_multiplier: f64,
    /// Water-stress risk, 0-100
    pub base_water_risk: f64,
    /// Classification accuracy, 0-100
    pub base_accuracy: f64,
    /// Paddy share of land cover in percent
    pub base_paddy_coverage: f64,
}

pub const DEFAULT_REGION_KEY: &str = "default";

/// Compiled-in region table. The last entry is the fallback for custom-drawn areas.
pub const REGION_PROFILES: &[RegionProfile] = &[
    RegionProfile {
        key: "eastern_up",
        base_yield_avg: 4.0,
        yield_multiplier: 2.0,
        base_water_risk: 50.0,
        base_accuracy: 75.0,
        base_paddy_coverage: 40.0,
    },
    RegionProfile {
        key: "tamil_nadu",
        base_yield_avg: 5.5,
        yield_multiplier: 1.5,
        base_water_risk: 30.0,
        base_accuracy: 80.0,
        base_paddy_coverage: 55.0,
    },
    RegionProfile {
        key: "punjab",
        base_yield_avg: 6.8,
        yield_multiplier: 3.0,
        base_water_risk: 15.0,
        base_accuracy: 90.0,
        base_paddy_coverage: 70.0,
    },
    RegionProfile {
        key: "west_bengal",
        base_yield_avg: 4.5,
        yield_multiplier: 2.5,
        base_water_risk: 40.0,
        base_accuracy: 78.0,
        base_paddy_coverage: 50.0,
    },
    RegionProfile {
        key: DEFAULT_REGION_KEY,
        base_yield_avg: 5.0,
        yield_multiplier: 2.0,
        base_water_risk: 35.0,
        base_accuracy: 82.0,
        base_paddy_coverage: 45.0,
    },
];

impl RegionProfile {
    /// Look up a profile by key, falling back to the default profile
    pub fn resolve(key: &str) -> &'static RegionProfile {
        REGION_PROFILES
            .iter()
            .find(|profile| profile.key == key)
            .unwrap_or_else(Self::fallback)
    }

    pub fn fallback() -> &'static RegionProfile {
        &REGION_PROFILES[REGION_PROFILES.len() - 1]
    }

    /// Fallow baseline so that paddy + water + urban + fallow sum to 100
    pub fn base_fallow_coverage(&self) -> f64 {
        100.0 - self.base_paddy_coverage - BASE_WATER_COVERAGE - BASE_URBAN_COVERAGE
    }
}

pub const BASE_WATER_COVERAGE: f64 = 20.0;
pub const BASE_URBAN_COVERAGE: f64 = 10.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_region() {
        let profile = RegionProfile::resolve("punjab");
        assert_eq!(profile.base_yield_avg, 6.8);
        assert_eq!(profile.base_paddy_coverage, 70.0);
    }

    #[test]
    fn test_resolve_unknown_region_falls_back() {
        let profile = RegionProfile::resolve("custom_polygon_17");
        assert_eq!(profile.key, DEFAULT_REGION_KEY);
        assert_eq!(profile.base_accuracy, 82.0);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert_eq!(RegionProfile::resolve("Punjab").key, DEFAULT_REGION_KEY);
    }

    #[test]
    fn test_baselines_sum_to_100() {
        for profile in REGION_PROFILES {
            let total = profile.base_paddy_coverage
                + BASE_WATER_COVERAGE
                + BASE_URBAN_COVERAGE
                + profile.base_fallow_coverage();
            assert_eq!(total, 100.0, "region {}", profile.key);
        }
    }
}
