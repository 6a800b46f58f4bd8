//! Shared types and analysis logic for the PaddyTrack platform
//!
//! This crate contains the metric synthesis and report formatting used by
//! the backend and, through WASM, by the browser frontend.

pub mod models;
pub mod random;
pub mod report;
pub mod synthesis;
pub mod types;
pub mod validation;

pub use models::*;
pub use report::{format_report, REPORT_FILENAME};
pub use synthesis::{synthesize_metrics, SynthesisError};
pub use types::*;
pub use validation::*;
