// src/booking.rs

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::timestamps::{app_offset, parse_timestamp};
use crate::domain::{RequestStatus, SprayRequest};
use crate::pricing::{CouponTable, PriceQuote, PricingError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookingError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Unreadable spraying date: {0}")]
    InvalidDate(String),
}

/// The booking form as the user typed it. Every input is text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingForm {
    pub address: String,
    pub acres: String,
    pub number_of_tanks: String,
    pub tanks_to_spray: String,
    /// `YYYY-MM-DD` from the date picker, or RFC 3339.
    pub spraying_date: String,
    pub agrochemical: String,
    pub crop: String,
    pub coupon: String,
}

impl BookingForm {
    /// First required input left blank, in form order.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("acres", &self.acres),
            ("numberOfTanks", &self.number_of_tanks),
            ("tanksToSpray", &self.tanks_to_spray),
            ("sprayingDate", &self.spraying_date),
            ("crop", &self.crop),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }

    pub fn quote(&self, base_price: f64, coupons: &CouponTable) -> Result<PriceQuote, PricingError> {
        PriceQuote::compute(base_price, Some(self.coupon.as_str()), coupons)
    }

    /// Builds the `Pending` request document the form submits.
    ///
    /// Numeric inputs that do not parse are stored as 0. The price is the
    /// quote's final price; `coupon_applied` is the trimmed coupon text.
    pub fn into_request(
        self,
        id: impl Into<String>,
        user_id: impl Into<String>,
        quote: &PriceQuote,
        now: DateTime<Utc>,
    ) -> Result<SprayRequest, BookingError> {
        if let Some(field) = self.missing_field() {
            return Err(BookingError::MissingField(field));
        }

        let spraying_date = parse_timestamp(&self.spraying_date)
            .and_then(|local| app_offset().from_local_datetime(&local).single())
            .map(|at| at.to_rfc3339())
            .ok_or_else(|| BookingError::InvalidDate(self.spraying_date.trim().to_string()))?;

        let now = now.with_timezone(&app_offset()).to_rfc3339();
        let coupon = self.coupon.trim();

        Ok(SprayRequest {
            id: id.into(),
            user_id: Some(user_id.into()),
            address: Some(self.address.trim().to_string()),
            crop: Some(self.crop.trim().to_string()),
            agrochemical: Some(self.agrochemical.trim().to_string()),
            acres: Some(parse_or_zero(&self.acres)),
            number_of_tanks: Some(parse_or_zero(&self.number_of_tanks)),
            tanks_to_spray: Some(parse_or_zero(&self.tanks_to_spray)),
            price: Some(quote.final_price),
            status: Some(RequestStatus::Pending),
            spraying_date: Some(spraying_date),
            created_at: Some(now.clone()),
            updated_at: Some(now),
            coupon_applied: (!coupon.is_empty()).then(|| coupon.to_string()),
        })
    }
}

fn parse_or_zero<N>(raw: &str) -> N
where
    N: std::str::FromStr + Default + PartialOrd,
{
    raw.trim()
        .parse::<N>()
        .ok()
        // NaN fails `>=`, so "NaN" also reads as zero.
        .filter(|n| *n >= N::default())
        .unwrap_or_default()
}
