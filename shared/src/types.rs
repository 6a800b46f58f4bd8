//! Common types used across the platform

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::validation::parse_iso_date;

/// Calendar date range of an analysis. Either bound may come first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse both bounds as `YYYY-MM-DD`
    pub fn parse(start: &str, end: &str) -> Result<Self, &'static str> {
        Ok(Self::new(parse_iso_date(start)?, parse_iso_date(end)?))
    }

    /// Absolute number of whole days between the bounds
    pub fn elapsed_days(&self) -> i64 {
        (self.end - self.start).num_days().abs()
    }

    /// Seed for the per-request random stream
    pub fn seed(&self) -> u64 {
        self.elapsed_days() as u64 + u64::from(self.start.day()) + u64::from(self.end.day())
    }
}
