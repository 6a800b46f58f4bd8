//! Business logic services for the PaddyTrack backend

pub mod analysis;
pub mod report;

pub use analysis::AnalysisService;
pub use report::{ReportFile, ReportService};
