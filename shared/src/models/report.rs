//! Report download parameters

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::MetricsBundle;

/// Body of a report download.
///
/// Fields are kept as raw JSON values: the report must render whatever the
/// client sends, substituting placeholders for anything missing or mistyped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportParams {
    pub results: Value,
    pub aoi: Value,
    pub start_date: Value,
    pub end_date: Value,
    pub satellite: Value,
    pub model: Value,
}

impl ReportParams {
    /// Build parameters from an arbitrary JSON body, never failing
    pub fn from_value(body: Value) -> Self {
        serde_json::from_value(body).unwrap_or_default()
    }

    /// Build parameters from a freshly synthesized bundle
    pub fn from_bundle(
        bundle: &MetricsBundle,
        aoi: &str,
        start_date: &str,
        end_date: &str,
        satellite: &str,
        model: &str,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            results: serde_json::to_value(bundle)?,
            aoi: Value::from(aoi),
            start_date: Value::from(start_date),
            end_date: Value::from(end_date),
            satellite: Value::from(satellite),
            model: Value::from(model),
        })
    }
}
