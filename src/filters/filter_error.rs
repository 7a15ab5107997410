use chrono::NaiveDate;
use thiserror::Error;

/// Caller-level configuration problems.
///
/// Bad individual records never show up here; they are dropped from the
/// result instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("Start date {start} is after end date {end}")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid distance limit '{0}': expected a positive number of kilometers or 'unbounded'")]
    InvalidDistance(String),
}
