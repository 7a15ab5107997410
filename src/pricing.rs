// src/pricing.rs

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_BASE_PRICE: f64 = 1500.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("Invalid coupon code: {0}")]
    InvalidCoupon(String),
}

/// Coupon code → percent off.
pub type CouponTable = BTreeMap<String, u8>;

pub fn default_coupons() -> CouponTable {
    BTreeMap::from([("DISCOUNT10".to_string(), 10), ("DISCOUNT20".to_string(), 20)])
}

/// The price shown on the last step of the booking form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    pub base_price: f64,
    pub coupon: Option<String>,
    pub percent_off: u8,
    pub final_price: f64,
}

impl PriceQuote {
    /// Always discounts from `base_price`, so re-applying a coupon does not
    /// stack. A blank coupon yields the base price.
    pub fn compute(
        base_price: f64,
        coupon: Option<&str>,
        coupons: &CouponTable,
    ) -> Result<Self, PricingError> {
        let code = coupon.map(str::trim).filter(|c| !c.is_empty());

        let Some(code) = code else {
            return Ok(Self {
                base_price,
                coupon: None,
                percent_off: 0,
                final_price: base_price,
            });
        };

        let percent_off = *coupons
            .get(code)
            .ok_or_else(|| PricingError::InvalidCoupon(code.to_string()))?;

        Ok(Self {
            base_price,
            coupon: Some(code.to_string()),
            percent_off,
            final_price: base_price - base_price * f64::from(percent_off) / 100.0,
        })
    }

    /// `"₹1350.00"`
    pub fn display(&self) -> String {
        format!("₹{:.2}", self.final_price)
    }
}
