// src/filters/criteria.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::filter_error::FilterError;

/// A finite, strictly positive distance in kilometers.
///
/// Only [`DistanceLimit::within`] and [`DistanceLimit::parse`] build one.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Kilometers(f64);

impl Kilometers {
    pub fn get(self) -> f64 {
        self.0
    }
}

/// Maximum distance a discovery list should show.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Option<f64>", into = "Option<f64>")]
pub enum DistanceLimit {
    #[default]
    Unbounded,
    Within(Kilometers),
}

impl DistanceLimit {
    pub fn within(km: f64) -> Result<Self, FilterError> {
        if km.is_finite() && km > 0.0 {
            Ok(DistanceLimit::Within(Kilometers(km)))
        } else {
            Err(FilterError::InvalidDistance(km.to_string()))
        }
    }

    /// Accepts `"25"`, `"12.5 km"`, `"unbounded"`, `"any"` or a blank string.
    pub fn parse(input: &str) -> Result<Self, FilterError> {
        let trimmed = input.trim();
        let lowered = trimmed.to_lowercase();

        if lowered.is_empty() || lowered == "unbounded" || lowered == "any" {
            return Ok(DistanceLimit::Unbounded);
        }

        let number = lowered
            .strip_suffix("km")
            .unwrap_or(&lowered)
            .trim_end();

        number
            .parse::<f64>()
            .ok()
            .and_then(|km| DistanceLimit::within(km).ok())
            .ok_or_else(|| FilterError::InvalidDistance(trimmed.to_string()))
    }

    /// Unknown distances always pass.
    pub fn admits(&self, distance_km: Option<f64>) -> bool {
        match (self, distance_km) {
            (DistanceLimit::Unbounded, _) | (_, None) => true,
            (DistanceLimit::Within(max), Some(d)) => d <= max.get(),
        }
    }
}

impl TryFrom<Option<f64>> for DistanceLimit {
    type Error = FilterError;

    fn try_from(value: Option<f64>) -> Result<Self, Self::Error> {
        match value {
            None => Ok(DistanceLimit::Unbounded),
            Some(km) => DistanceLimit::within(km),
        }
    }
}

impl From<DistanceLimit> for Option<f64> {
    fn from(limit: DistanceLimit) -> Self {
        match limit {
            DistanceLimit::Unbounded => None,
            DistanceLimit::Within(km) => Some(km.get()),
        }
    }
}

/// Transient UI filter state for one list.
///
/// The date setters keep `date_start <= date_end`. Criteria that arrive by
/// deserialization skip the setters, so [`FilterCriteria::validate`] is run
/// again by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria<S> {
    search_text: String,
    status: Option<S>,
    date_start: Option<NaiveDate>,
    date_end: Option<NaiveDate>,
    max_distance: DistanceLimit,
}

impl<S> Default for FilterCriteria<S> {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            status: None,
            date_start: None,
            date_end: None,
            max_distance: DistanceLimit::Unbounded,
        }
    }
}

impl<S> FilterCriteria<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn status(&self) -> Option<&S> {
        self.status.as_ref()
    }

    pub fn date_start(&self) -> Option<NaiveDate> {
        self.date_start
    }

    pub fn date_end(&self) -> Option<NaiveDate> {
        self.date_end
    }

    pub fn max_distance(&self) -> DistanceLimit {
        self.max_distance
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn set_status(&mut self, status: Option<S>) {
        self.status = status;
    }

    pub fn set_max_distance(&mut self, limit: DistanceLimit) {
        self.max_distance = limit;
    }

    /// Rejects a start after the current end; both bounds stay as they were.
    pub fn set_date_start(&mut self, start: Option<NaiveDate>) -> Result<(), FilterError> {
        check_range(start, self.date_end)?;
        self.date_start = start;
        Ok(())
    }

    /// Rejects an end before the current start; both bounds stay as they were.
    pub fn set_date_end(&mut self, end: Option<NaiveDate>) -> Result<(), FilterError> {
        check_range(self.date_start, end)?;
        self.date_end = end;
        Ok(())
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.set_search_text(text);
        self
    }

    pub fn with_status(mut self, status: S) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_max_distance(mut self, limit: DistanceLimit) -> Self {
        self.max_distance = limit;
        self
    }

    pub fn with_date_range(
        mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Self, FilterError> {
        check_range(start, end)?;
        self.date_start = start;
        self.date_end = end;
        Ok(self)
    }

    /// "Clear all filters".
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn has_date_bounds(&self) -> bool {
        self.date_start.is_some() || self.date_end.is_some()
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        check_range(self.date_start, self.date_end).inspect_err(|e| {
            warn!(error = %e, "rejecting filter criteria");
        })
    }
}

fn check_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<(), FilterError> {
    match (start, end) {
        (Some(start), Some(end)) if start > end => {
            Err(FilterError::InvertedDateRange { start, end })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn start_after_existing_end_is_rejected() {
        let mut criteria = FilterCriteria::<()>::new();
        criteria.set_date_end(Some(day(2025, 6, 1))).unwrap();

        let err = criteria.set_date_start(Some(day(2025, 6, 10))).unwrap_err();

        assert_eq!(
            err,
            FilterError::InvertedDateRange {
                start: day(2025, 6, 10),
                end: day(2025, 6, 1)
            }
        );
        assert_eq!(criteria.date_start(), None);
        assert_eq!(criteria.date_end(), Some(day(2025, 6, 1)));
    }

    #[test]
    fn end_before_existing_start_is_rejected() {
        let mut criteria = FilterCriteria::<()>::new();
        criteria.set_date_start(Some(day(2025, 6, 10))).unwrap();

        assert!(criteria.set_date_end(Some(day(2025, 6, 9))).is_err());
        assert_eq!(criteria.date_end(), None);
        assert_eq!(criteria.date_start(), Some(day(2025, 6, 10)));
    }

    #[test]
    fn single_day_range_is_allowed() {
        let criteria = FilterCriteria::<()>::new()
            .with_date_range(Some(day(2025, 6, 10)), Some(day(2025, 6, 10)))
            .unwrap();
        assert!(criteria.validate().is_ok());
    }

    #[test]
    fn deserialized_inverted_range_fails_validation() {
        let criteria: FilterCriteria<()> =
            serde_json::from_str(r#"{"date_start": "2025-06-10", "date_end": "2025-06-01"}"#)
                .unwrap();
        assert!(matches!(
            criteria.validate(),
            Err(FilterError::InvertedDateRange { .. })
        ));
        // Not swapped behind the caller's back.
        assert_eq!(criteria.date_start(), Some(day(2025, 6, 10)));
    }

    #[test]
    fn clear_resets_everything() {
        let mut criteria = FilterCriteria::new()
            .with_search("paddy")
            .with_status(1u8)
            .with_max_distance(DistanceLimit::within(5.0).unwrap());
        criteria.set_date_start(Some(day(2025, 1, 1))).unwrap();

        criteria.clear();

        assert_eq!(criteria, FilterCriteria::default());
    }

    fn km(limit: DistanceLimit) -> Option<f64> {
        limit.into()
    }

    #[test]
    fn distance_limit_parsing() {
        assert_eq!(DistanceLimit::parse("25").map(km), Ok(Some(25.0)));
        assert_eq!(DistanceLimit::parse(" 12.5 km ").map(km), Ok(Some(12.5)));
        assert_eq!(DistanceLimit::parse(""), Ok(DistanceLimit::Unbounded));
        assert_eq!(
            DistanceLimit::parse("Unbounded"),
            Ok(DistanceLimit::Unbounded)
        );

        for bad in ["0", "-3", "abc", "NaN", "inf"] {
            assert!(DistanceLimit::parse(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn distance_limit_admits_unknown() {
        let limit = DistanceLimit::within(5.0).unwrap();
        assert!(limit.admits(None));
        assert!(limit.admits(Some(5.0)));
        assert!(!limit.admits(Some(5.01)));
        assert!(DistanceLimit::Unbounded.admits(Some(1e9)));
    }

    #[test]
    fn distance_limit_serde_rejects_non_positive() {
        assert!(serde_json::from_str::<DistanceLimit>("-1.0").is_err());
        assert_eq!(
            serde_json::from_str::<DistanceLimit>("null").unwrap(),
            DistanceLimit::Unbounded
        );
        assert_eq!(
            serde_json::to_string(&DistanceLimit::within(5.0).unwrap()).unwrap(),
            "5.0"
        );
    }

    #[test]
    fn invalid_kilometers_cannot_be_built() {
        for bad in [f64::NAN, f64::INFINITY, -1.0, 0.0] {
            assert!(matches!(
                DistanceLimit::within(bad),
                Err(FilterError::InvalidDistance(_))
            ));
        }
        for json in ["\"NaN\"", "0", "-0.5", "1e400"] {
            assert!(
                serde_json::from_str::<DistanceLimit>(json).is_err(),
                "{json} should be rejected"
            );
        }
        assert!(DistanceLimit::within(f64::MIN_POSITIVE).is_ok());
    }
}
