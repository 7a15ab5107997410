// src/render.rs

use crate::crops::search_crops;
use crate::domain::timestamps::display_date;
use crate::domain::{ServiceProvider, SprayRequest};
use crate::location::{format_distance, Annotated};
use crate::snapshot::ListOutcome;

/// `BhuMeet Spraying Services | 42.7 km away | Chandrapur, MAHARASHTRA`
pub fn provider_row(provider: &Annotated<ServiceProvider>) -> String {
    let region = provider.item.region_label();
    let mut row = format!(
        "{} | {}",
        provider.item.name,
        format_distance(provider.distance_km)
    );
    if !region.is_empty() {
        row.push_str(" | ");
        row.push_str(&region);
    }
    row
}

/// `Paddy Spraying | Pending | Jun 10, 2025 | ₹1350.00 | Wardha`
pub fn request_row(request: &SprayRequest) -> String {
    let status = request.status.map(|s| s.as_str()).unwrap_or("Unknown");
    let date = request
        .spraying_at()
        .map(|at| display_date(at.date()))
        .unwrap_or_else(|| "Invalid date".to_string());
    let price = request.price.unwrap_or_default();

    format!(
        "{} | {} | {} | ₹{:.2} | {}",
        request.title(),
        status,
        date,
        price,
        request.address.as_deref().unwrap_or_default()
    )
}

/// Message for the non-item outcomes; `None` when there are rows to show.
pub fn empty_state_message<T>(outcome: &ListOutcome<T>) -> Option<&'static str> {
    match outcome {
        ListOutcome::Loading => Some("Loading..."),
        ListOutcome::NoData => Some("Nothing here yet."),
        ListOutcome::NoMatches => Some("No results match your filters."),
        ListOutcome::Items(_) => None,
    }
}

/// Crop picker rows, or one empty-state line when the query matches nothing.
pub fn crop_lines(query: &str) -> Vec<String> {
    let matches = search_crops(query);
    if matches.is_empty() {
        return vec![format!("No crops match '{}'.", query.trim())];
    }
    matches.into_iter().map(str::to_string).collect()
}
