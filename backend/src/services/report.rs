//! Report service for downloadable analysis summaries

use chrono::{Local, NaiveDateTime};
use serde_json::Value;
use shared::{format_report, ReportParams, REPORT_FILENAME};

/// Rendered report ready to be sent as an attachment
#[derive(Debug, Clone)]
pub struct ReportFile {
    pub filename: &'static str,
    pub content: String,
}

/// Report service
#[derive(Clone, Default)]
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        Self
    }

    /// Render a report from a raw request body, stamped with the local time
    pub fn generate(&self, body: Value) -> ReportFile {
        self.generate_at(body, Local::now().naive_local())
    }

    pub fn generate_at(&self, body: Value, generated_at: NaiveDateTime) -> ReportFile {
        let params = ReportParams::from_value(body);
        ReportFile {
            filename: REPORT_FILENAME,
            content: format_report(&params, generated_at),
        }
    }
}
