//! Report error types.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors from report computations.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The requested range ends before it starts. Reported, never silently
    /// corrected.
    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}
