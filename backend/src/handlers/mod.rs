//! HTTP handlers for the PaddyTrack API

pub mod analysis;
pub mod health;
pub mod region;
pub mod report;

pub use analysis::run_analysis;
pub use health::health_check;
pub use region::list_regions;
pub use report::download_report;
