//! Provider discovery and request-list filtering for the BhuMeet spraying app.
//!
//! Backend snapshots come in as plain vectors; [`location::annotate`] adds a
//! distance from the user's position, [`filters::apply`] narrows and orders
//! the result, and [`snapshot::SnapshotFeed`] ties the latest pushed state
//! together for a list screen.

pub mod booking;
pub mod config;
pub mod crops;
pub mod domain;
pub mod errors;
pub mod filters;
pub mod location;
pub mod pricing;
pub mod render;
pub mod snapshot;

#[cfg(test)]
mod tests;
