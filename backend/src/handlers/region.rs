//! Region profile listing

use axum::Json;
use shared::{RegionProfile, REGION_PROFILES};

/// List the compiled-in study area profiles
pub async fn list_regions() -> Json<&'static [RegionProfile]> {
    Json(REGION_PROFILES)
}
