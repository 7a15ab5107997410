// src/location/distance.rs

use std::cmp::Ordering;

use super::geo::{haversine_km, GeoPoint};

/// Anything with an identity, a display name and (maybe) a position.
pub trait Locatable {
    fn id(&self) -> &str;
    fn display_name(&self) -> &str;
    fn coordinates(&self) -> Option<GeoPoint>;
}

/// An entity decorated with its distance from the current reference point.
///
/// Derived per render; never persisted. `distance_km` is `None` when either
/// the reference or the entity's own coordinates are unknown.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotated<T> {
    pub item: T,
    pub distance_km: Option<f64>,
}

impl<T> Annotated<T> {
    pub fn unknown(item: T) -> Self {
        Self {
            item,
            distance_km: None,
        }
    }
}

/// Decorates every entity with its great-circle distance from `reference`.
///
/// Entities without coordinates, or with NaN / out-of-range coordinates, get
/// an undefined distance instead of an error. The input is not modified.
pub fn annotate<T>(reference: Option<GeoPoint>, entities: &[T]) -> Vec<Annotated<T>>
where
    T: Locatable + Clone,
{
    let reference = reference.filter(GeoPoint::is_valid);

    entities
        .iter()
        .map(|entity| {
            let distance_km = match (reference, entity.coordinates()) {
                (Some(from), Some(to)) if to.is_valid() => Some(haversine_km(from, to)),
                _ => None,
            };
            Annotated {
                item: entity.clone(),
                distance_km,
            }
        })
        .collect()
}

/// Nearest first; unknown distances after all known ones; ties broken by
/// case-insensitive name.
pub fn compare_by_proximity<T: Locatable>(a: &Annotated<T>, b: &Annotated<T>) -> Ordering {
    proximity_order(
        a.distance_km,
        a.item.display_name(),
        b.distance_km,
        b.item.display_name(),
    )
}

pub(crate) fn proximity_order(
    a_km: Option<f64>,
    a_name: &str,
    b_km: Option<f64>,
    b_name: &str,
) -> Ordering {
    let by_distance = match (a_km, b_km) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    by_distance.then_with(|| compare_names(a_name, b_name))
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Presentation helper for list rows: `"42.7 km away"`.
pub fn format_distance(distance_km: Option<f64>) -> String {
    match distance_km {
        Some(km) => format!("{km:.1} km away"),
        None => "distance unknown".to_string(),
    }
}
