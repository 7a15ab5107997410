// src/filters/sort.rs

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::record::Filterable;
use crate::location::proximity_order;

/// The comparator applied after filtering. Every variant sorts stably, so
/// equal-ranked rows keep the order the snapshot delivered them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Nearest first, unknown distances last, then by name. Discovery lists.
    Proximity,
    /// Most recently created first; records without a creation time last.
    NewestFirst,
    #[default]
    AsReceived,
}

impl SortOrder {
    pub fn compare<R: Filterable>(&self, a: &R, b: &R) -> Ordering {
        match self {
            SortOrder::Proximity => proximity_order(
                a.distance_km(),
                a.display_name(),
                b.distance_km(),
                b.display_name(),
            ),
            SortOrder::NewestFirst => match (a.created_at(), b.created_at()) {
                (Some(a), Some(b)) => b.cmp(&a),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortOrder::AsReceived => Ordering::Equal,
        }
    }

    pub fn sort<R: Filterable>(&self, records: &mut [R]) {
        if *self == SortOrder::AsReceived {
            return;
        }
        // `sort_by` is a stable merge sort.
        records.sort_by(|a, b| self.compare(a, b));
    }
}
