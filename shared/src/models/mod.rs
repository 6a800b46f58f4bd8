//! Domain models for the PaddyTrack analysis platform

mod analysis;
mod region;
mod report;

pub use analysis::*;
pub use region::*;
pub use report::*;
