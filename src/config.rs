// src/config.rs

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::filters::{DistanceLimit, FilterError};
use crate::pricing::{default_coupons, CouponTable, DEFAULT_BASE_PRICE};

/// Radius of the "Within 100 km" chip on the providers screen.
pub const DEFAULT_RADIUS_KM: f64 = 100.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Tunables for the discovery and booking flows. Every field has a default,
/// so an empty JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub default_radius_km: f64,
    pub base_spray_price: f64,
    pub coupons: CouponTable,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_radius_km: DEFAULT_RADIUS_KM,
            base_spray_price: DEFAULT_BASE_PRICE,
            coupons: default_coupons(),
        }
    }
}

impl EngineConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: EngineConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        debug!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.default_radius_km.is_finite() && self.default_radius_km > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "default_radius_km must be a positive number, got {}",
                self.default_radius_km
            )));
        }
        if !(self.base_spray_price.is_finite() && self.base_spray_price > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "base_spray_price must be a positive number, got {}",
                self.base_spray_price
            )));
        }
        if let Some((code, pct)) = self.coupons.iter().find(|(_, pct)| !(1..=100).contains(*pct)) {
            return Err(ConfigError::Invalid(format!(
                "coupon {code} must take 1-100 percent off, got {pct}"
            )));
        }
        Ok(())
    }

    /// Fails only for a config that skipped [`EngineConfig::validate`].
    pub fn default_distance_limit(&self) -> Result<DistanceLimit, FilterError> {
        DistanceLimit::within(self.default_radius_km)
    }
}
