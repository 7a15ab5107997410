// src/tests/property_tests.rs

use std::cmp::Ordering;

use chrono::Duration;
use proptest::prelude::*;

use super::utils::day;
use crate::domain::{RequestStatus, ServiceProvider, SprayRequest};
use crate::filters::{apply, DistanceLimit, FilterCriteria, SortOrder};
use crate::location::{annotate, compare_by_proximity, haversine_km, Annotated, GeoPoint};

fn valid_point() -> impl Strategy<Value = GeoPoint> {
    (-90.0..=90.0f64, -180.0..=180.0f64).prop_map(|(latitude, longitude)| GeoPoint {
        latitude,
        longitude,
    })
}

fn any_coordinates() -> impl Strategy<Value = Option<GeoPoint>> {
    prop_oneof![
        3 => valid_point().prop_map(Some),
        1 => Just(None),
        1 => Just(Some(GeoPoint { latitude: f64::NAN, longitude: 0.0 })),
        1 => Just(Some(GeoPoint { latitude: 123.0, longitude: 0.0 })),
    ]
}

fn providers() -> impl Strategy<Value = Vec<ServiceProvider>> {
    prop::collection::vec(("[a-cA-C]{1,3}", any_coordinates()), 0..25).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, coordinates))| ServiceProvider {
                id: i.to_string(),
                name,
                coordinates,
                ..Default::default()
            })
            .collect()
    })
}

/// Few distinct distances and names so ties are common.
fn ranked_rows() -> impl Strategy<Value = Vec<Annotated<ServiceProvider>>> {
    let distance = prop_oneof![Just(None), (0u8..4).prop_map(|d| Some(f64::from(d)))];
    let name = prop::sample::select(vec!["alpha", "Alpha", "beta", "Gamma"]);

    prop::collection::vec((distance, name), 0..30).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (distance_km, name))| Annotated {
                item: ServiceProvider {
                    id: i.to_string(),
                    name: name.to_string(),
                    ..Default::default()
                },
                distance_km,
            })
            .collect()
    })
}

fn requests() -> impl Strategy<Value = Vec<SprayRequest>> {
    let row = (
        prop::sample::select(RequestStatus::ALL.to_vec()),
        prop::option::of(0i64..60),
        prop::sample::select(vec!["Paddy", "Cotton", "Wheat", "Soyabean"]),
        prop::option::of(0i64..60),
    );

    prop::collection::vec(row, 0..25).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (status, spray_offset, crop, created_offset))| SprayRequest {
                id: format!("r{i}"),
                address: Some(format!("Field {i}")),
                crop: Some(crop.to_string()),
                status: Some(status),
                price: Some(1500.0),
                spraying_date: spray_offset
                    .map(|d| (day(2025, 6, 1) + Duration::days(d)).to_string()),
                created_at: created_offset
                    .map(|d| format!("{}T08:00:00Z", day(2025, 5, 1) + Duration::days(d))),
                ..Default::default()
            })
            .collect()
    })
}

fn request_criteria() -> impl Strategy<Value = FilterCriteria<RequestStatus>> {
    (
        prop::sample::select(vec!["", "  ", "pad", "COT", "field 1", "xyz"]),
        prop::option::of(prop::sample::select(RequestStatus::ALL.to_vec())),
        prop::option::of(0i64..60),
        prop::option::of(0i64..30),
    )
        .prop_map(|(search, status, start, span)| {
            let start_day = start.map(|d| day(2025, 6, 1) + Duration::days(d));
            let end_day = match (start_day, span) {
                (Some(s), Some(span)) => Some(s + Duration::days(span)),
                (None, Some(span)) => Some(day(2025, 6, 1) + Duration::days(span)),
                (_, None) => None,
            };
            let mut criteria = FilterCriteria::new()
                .with_search(search)
                .with_date_range(start_day, end_day)
                .unwrap();
            criteria.set_status(status);
            criteria
        })
}

proptest! {
    #[test]
    fn distance_is_symmetric(a in valid_point(), b in valid_point()) {
        let ab = haversine_km(a, b);
        let ba = haversine_km(b, a);
        prop_assert!(ab >= 0.0);
        prop_assert!((ab - ba).abs() <= 1e-9 * ab.max(1.0));
    }

    #[test]
    fn no_reference_means_every_distance_unknown(list in providers()) {
        let annotated = annotate(None, &list);
        prop_assert_eq!(annotated.len(), list.len());
        prop_assert!(annotated.iter().all(|a| a.distance_km.is_none()));
    }

    #[test]
    fn proximity_order_is_transitive(rows in ranked_rows()) {
        for a in &rows {
            for b in &rows {
                for c in &rows {
                    let ab = compare_by_proximity(a, b);
                    let bc = compare_by_proximity(b, c);
                    if ab != Ordering::Greater && bc != Ordering::Greater {
                        prop_assert_ne!(compare_by_proximity(a, c), Ordering::Greater);
                    }
                    prop_assert_eq!(ab, compare_by_proximity(b, a).reverse());
                }
            }
        }
    }

    #[test]
    fn proximity_sort_is_stable(rows in ranked_rows()) {
        let sorted = apply(&rows, &FilterCriteria::new(), SortOrder::Proximity).unwrap();

        for pair in sorted.windows(2) {
            prop_assert_ne!(compare_by_proximity(&pair[0], &pair[1]), Ordering::Greater);
            if compare_by_proximity(&pair[0], &pair[1]) == Ordering::Equal {
                let first: usize = pair[0].item.id.parse().unwrap();
                let second: usize = pair[1].item.id.parse().unwrap();
                prop_assert!(first < second, "equal rows swapped: {} before {}", first, second);
            }
        }
    }

    #[test]
    fn default_criteria_keep_everything(list in requests()) {
        let kept = apply(&list, &FilterCriteria::new(), SortOrder::AsReceived).unwrap();
        prop_assert_eq!(&kept, &list);

        let newest = apply(&list, &FilterCriteria::new(), SortOrder::NewestFirst).unwrap();
        prop_assert_eq!(newest.len(), list.len());
    }

    #[test]
    fn unbounded_discovery_keeps_every_well_formed_provider(
        list in providers(),
        reference in prop::option::of(valid_point()),
    ) {
        let annotated = annotate(reference, &list);
        let criteria = FilterCriteria::new().with_max_distance(DistanceLimit::Unbounded);
        let kept = apply(&annotated, &criteria, SortOrder::Proximity).unwrap();
        prop_assert_eq!(kept.len(), list.len());
    }

    #[test]
    fn filtering_is_idempotent(list in requests(), criteria in request_criteria()) {
        let once = apply(&list, &criteria, SortOrder::NewestFirst).unwrap();
        let twice = apply(&once, &criteria, SortOrder::NewestFirst).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn repeated_calls_agree(list in requests(), criteria in request_criteria()) {
        prop_assert_eq!(
            apply(&list, &criteria, SortOrder::NewestFirst).unwrap(),
            apply(&list, &criteria, SortOrder::NewestFirst).unwrap()
        );
    }
}
