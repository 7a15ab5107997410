// src/filters/record.rs

use std::borrow::Cow;
use std::fmt::Debug;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::location::Annotated;

/// The date a record is filtered on, as far as the record can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordDate {
    Missing,
    Valid(NaiveDate),
    /// A value was present but could not be read as a date.
    Unparseable,
}

impl RecordDate {
    pub fn from_parsed(raw: Option<&str>, parsed: Option<NaiveDateTime>) -> Self {
        match (raw.map(str::trim).filter(|s| !s.is_empty()), parsed) {
            (None, _) => RecordDate::Missing,
            (Some(_), Some(dt)) => RecordDate::Valid(dt.date()),
            (Some(_), None) => RecordDate::Unparseable,
        }
    }
}

/// The view of a record the filter engine works with.
///
/// Only `search_fields` and `display_name` are mandatory; the rest default to
/// "not applicable" so record types opt into the stages that make sense for
/// them.
pub trait Filterable {
    type Status: PartialEq + Clone + Debug;

    /// Text the search box is matched against (OR across fields).
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    fn display_name(&self) -> &str;

    fn status(&self) -> Option<&Self::Status> {
        None
    }

    fn record_date(&self) -> RecordDate {
        RecordDate::Missing
    }

    fn distance_km(&self) -> Option<f64> {
        None
    }

    /// Creation instant, for newest-first ordering.
    fn created_at(&self) -> Option<DateTime<Utc>> {
        None
    }

    /// `false` for records missing fields the list cannot render without.
    fn is_well_formed(&self) -> bool {
        true
    }
}

impl<T: Filterable> Filterable for Annotated<T> {
    type Status = T::Status;

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        self.item.search_fields()
    }

    fn display_name(&self) -> &str {
        self.item.display_name()
    }

    fn status(&self) -> Option<&Self::Status> {
        self.item.status()
    }

    fn record_date(&self) -> RecordDate {
        self.item.record_date()
    }

    fn distance_km(&self) -> Option<f64> {
        self.distance_km
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.item.created_at()
    }

    fn is_well_formed(&self) -> bool {
        self.item.is_well_formed()
    }
}
