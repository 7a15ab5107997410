// src/snapshot.rs

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::filters::{apply, FilterCriteria, FilterError, Filterable, SortOrder};
use crate::location::{annotate, Annotated, GeoPoint, Locatable};

/// What a list screen should show for the current state.
#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome<T> {
    /// No snapshot has arrived yet.
    Loading,
    /// The backend collection is empty.
    NoData,
    /// There is data, but none of it matches the criteria.
    NoMatches,
    Items(Vec<T>),
}

impl<T> ListOutcome<T> {
    fn classify(snapshot_len: Option<usize>, items: Vec<T>) -> Self {
        match snapshot_len {
            None => ListOutcome::Loading,
            Some(0) => ListOutcome::NoData,
            Some(_) if items.is_empty() => ListOutcome::NoMatches,
            Some(_) => ListOutcome::Items(items),
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            ListOutcome::Items(items) => items,
            _ => &[],
        }
    }
}

/// Holds the latest state pushed from outside (backend snapshot, device
/// location, filter edits) and derives the visible list on demand.
///
/// Each snapshot replaces the previous one wholesale; nothing is merged.
#[derive(Debug, Clone)]
pub struct SnapshotFeed<T: Filterable> {
    snapshot: Option<Vec<T>>,
    reference: Option<GeoPoint>,
    criteria: FilterCriteria<T::Status>,
    order: SortOrder,
}

impl<T> SnapshotFeed<T>
where
    T: Filterable + Clone,
{
    pub fn new(order: SortOrder) -> Self {
        Self {
            snapshot: None,
            reference: None,
            criteria: FilterCriteria::default(),
            order,
        }
    }

    pub fn with_criteria(mut self, criteria: FilterCriteria<T::Status>) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn replace_snapshot(&mut self, records: Vec<T>) {
        debug!(records = records.len(), "snapshot replaced");
        self.snapshot = Some(records);
    }

    pub fn snapshot(&self) -> Option<&[T]> {
        self.snapshot.as_deref()
    }

    pub fn criteria(&self) -> &FilterCriteria<T::Status> {
        &self.criteria
    }

    pub fn criteria_mut(&mut self) -> &mut FilterCriteria<T::Status> {
        &mut self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria<T::Status>) {
        self.criteria = criteria;
    }

    /// The filtered, ordered list, without distance annotation.
    pub fn view(&self) -> Result<ListOutcome<T>, FilterError> {
        let Some(records) = self.snapshot.as_deref() else {
            return Ok(ListOutcome::Loading);
        };
        let items = apply(records, &self.criteria, self.order)?;
        Ok(ListOutcome::classify(Some(records.len()), items))
    }
}

impl<T> SnapshotFeed<T>
where
    T: Filterable + Locatable + Clone,
{
    /// `None` when permission is denied or no fix is available yet.
    pub fn set_reference(&mut self, reference: Option<GeoPoint>) {
        self.reference = reference;
    }

    pub fn reference(&self) -> Option<GeoPoint> {
        self.reference
    }

    /// Annotates with distance from the current reference, then filters and
    /// orders the annotated list.
    pub fn view_annotated(&self) -> Result<ListOutcome<Annotated<T>>, FilterError> {
        let Some(records) = self.snapshot.as_deref() else {
            return Ok(ListOutcome::Loading);
        };
        let annotated = annotate(self.reference, records);
        let items = apply(&annotated, &self.criteria, self.order)?;
        Ok(ListOutcome::classify(Some(records.len()), items))
    }
}

/// Decodes a JSON array of backend documents, skipping elements that do not
/// fit `T` instead of failing the whole snapshot.
pub fn decode_snapshot<T: DeserializeOwned>(json: &str) -> Result<Vec<T>, serde_json::Error> {
    let raw: Vec<Value> = serde_json::from_str(json)?;
    let total = raw.len();

    let records: Vec<T> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(index = idx, error = %e, "skipping undecodable document");
                None
            }
        })
        .collect();

    debug!(total, decoded = records.len(), "decoded snapshot");
    Ok(records)
}
