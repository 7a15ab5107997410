// src/tests/utils.rs

use chrono::NaiveDate;

use crate::domain::{RequestStatus, ServiceProvider, SprayRequest};
use crate::location::GeoPoint;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn point(latitude: f64, longitude: f64) -> GeoPoint {
    GeoPoint::new(latitude, longitude).unwrap()
}

pub fn provider(id: &str, name: &str, at: Option<(f64, f64)>) -> ServiceProvider {
    ServiceProvider {
        id: id.to_string(),
        name: name.to_string(),
        coordinates: at.map(|(lat, lon)| GeoPoint {
            latitude: lat,
            longitude: lon,
        }),
        ..Default::default()
    }
}

pub fn request(id: &str, status: RequestStatus, spraying_date: Option<&str>) -> SprayRequest {
    SprayRequest {
        id: id.to_string(),
        user_id: Some("farmer-1".to_string()),
        address: Some(format!("Plot {id}, Wardha")),
        crop: Some("Cotton".to_string()),
        agrochemical: Some("Neem oil".to_string()),
        acres: Some(2.0),
        price: Some(1500.0),
        status: Some(status),
        spraying_date: spraying_date.map(str::to_string),
        ..Default::default()
    }
}

pub fn ids<'a>(records: impl IntoIterator<Item = &'a SprayRequest>) -> Vec<&'a str> {
    records.into_iter().map(|r| r.id.as_str()).collect()
}
