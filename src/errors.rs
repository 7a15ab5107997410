// src/errors.rs

use std::path::PathBuf;
use thiserror::Error;

use crate::booking::BookingError;
use crate::config::ConfigError;
use crate::filters::FilterError;
use crate::location::GeoError;
use crate::pricing::PricingError;

/// Errors surfaced by the command-line driver.
///
/// The library modules each own a narrower error type; this enum only exists
/// so `main` can report any of them the same way.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not encode output: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error(transparent)]
    Geo(#[from] GeoError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type AppResult<T> = Result<T, AppError>;
