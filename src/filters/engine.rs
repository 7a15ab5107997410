// src/filters/engine.rs

use tracing::debug;

use super::criteria::FilterCriteria;
use super::filter_error::FilterError;
use super::record::{Filterable, RecordDate};
use super::sort::SortOrder;

/// Filters and orders one snapshot of records for display.
///
/// Stages run in a fixed order: well-formedness, text, status, distance,
/// date range, then the sort. The input slice is never touched; the result is
/// a fresh vector (possibly empty). The only error is a criteria object whose
/// date range is inverted.
pub fn apply<R>(
    records: &[R],
    criteria: &FilterCriteria<R::Status>,
    order: SortOrder,
) -> Result<Vec<R>, FilterError>
where
    R: Filterable + Clone,
{
    let mut out = filter_records(records, criteria)?;
    order.sort(&mut out);
    Ok(out)
}

/// The filter half of [`apply`], keeping the snapshot's order.
pub fn filter_records<R>(
    records: &[R],
    criteria: &FilterCriteria<R::Status>,
) -> Result<Vec<R>, FilterError>
where
    R: Filterable + Clone,
{
    criteria.validate()?;

    let needle = normalize_query(criteria.search_text());

    let well_formed: Vec<&R> = records.iter().filter(|r| is_usable(*r)).collect();
    let by_text: Vec<&R> = well_formed
        .into_iter()
        .filter(|r| matches_text(*r, needle.as_deref()))
        .collect();
    let by_status: Vec<&R> = by_text
        .into_iter()
        .filter(|r| matches_status(*r, criteria))
        .collect();
    let by_distance: Vec<&R> = by_status
        .into_iter()
        .filter(|r| criteria.max_distance().admits(r.distance_km()))
        .collect();
    let by_date: Vec<R> = by_distance
        .into_iter()
        .filter(|r| within_dates(*r, criteria))
        .cloned()
        .collect();

    debug!(
        input = records.len(),
        output = by_date.len(),
        "filtered snapshot"
    );

    Ok(by_date)
}

/// Lowercased, trimmed query, or `None` when there is nothing to match.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Case-insensitive substring test against any of `haystacks`.
pub fn contains_ignore_case<'a, I>(haystacks: I, needle: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    haystacks
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn is_usable<R: Filterable>(record: &R) -> bool {
    if !record.is_well_formed() {
        debug!(name = record.display_name(), "skipping malformed record");
        return false;
    }
    if record.record_date() == RecordDate::Unparseable {
        debug!(name = record.display_name(), "skipping record with unreadable date");
        return false;
    }
    true
}

fn matches_text<R: Filterable>(record: &R, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(needle) => {
            let fields = record.search_fields();
            contains_ignore_case(fields.iter().map(|f| f.as_ref()), needle)
        }
    }
}

fn matches_status<R: Filterable>(record: &R, criteria: &FilterCriteria<R::Status>) -> bool {
    match criteria.status() {
        None => true,
        Some(wanted) => record.status() == Some(wanted),
    }
}

fn within_dates<R: Filterable>(record: &R, criteria: &FilterCriteria<R::Status>) -> bool {
    if !criteria.has_date_bounds() {
        return true;
    }
    match record.record_date() {
        RecordDate::Valid(day) => {
            criteria.date_start().map_or(true, |start| day >= start)
                && criteria.date_end().map_or(true, |end| day <= end)
        }
        // A bound was set and the record has nothing to compare against.
        RecordDate::Missing | RecordDate::Unparseable => false,
    }
}
