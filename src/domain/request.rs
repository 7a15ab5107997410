// src/domain/request.rs

use std::borrow::Cow;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::status::{IllegalTransition, RequestStatus};
use super::timestamps::{
    app_offset, display_date, lenient_timestamp, parse_instant, parse_timestamp,
};
use crate::filters::{Filterable, RecordDate};

/// A spray request document as the backend delivers it.
///
/// Everything except `id` is optional here so that one bad document cannot
/// fail a whole snapshot; [`Filterable::is_well_formed`] decides what the
/// list can show.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SprayRequest {
    pub id: String,
    pub user_id: Option<String>,
    pub address: Option<String>,
    pub crop: Option<String>,
    pub agrochemical: Option<String>,
    pub acres: Option<f64>,
    pub number_of_tanks: Option<u32>,
    pub tanks_to_spray: Option<u32>,
    pub price: Option<f64>,
    #[serde(deserialize_with = "lenient_status")]
    pub status: Option<RequestStatus>,
    /// RFC 3339 or `YYYY-MM-DD`. Firestore timestamp objects are read into
    /// RFC 3339 text.
    #[serde(deserialize_with = "lenient_timestamp")]
    pub spraying_date: Option<String>,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<String>,
    pub coupon_applied: Option<String>,
}

/// Unknown status strings become `None` instead of a decode error.
fn lenient_status<'de, D>(deserializer: D) -> Result<Option<RequestStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

impl SprayRequest {
    pub fn spraying_at(&self) -> Option<NaiveDateTime> {
        self.spraying_date.as_deref().and_then(parse_timestamp)
    }

    /// Moves the request along its lifecycle and stamps `updated_at`.
    pub fn advance_status(
        &mut self,
        next: RequestStatus,
        now: DateTime<Utc>,
    ) -> Result<(), IllegalTransition> {
        if !self.status.is_some_and(|current| current.can_transition_to(next)) {
            return Err(IllegalTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = Some(next);
        self.updated_at = Some(now.with_timezone(&app_offset()).to_rfc3339());
        Ok(())
    }

    /// `"Paddy Spraying"`, the card title.
    pub fn title(&self) -> String {
        format!("{} Spraying", self.crop.as_deref().unwrap_or_default())
    }
}

fn non_empty(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

impl Filterable for SprayRequest {
    type Status = RequestStatus;

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields: Vec<Cow<'_, str>> = [&self.address, &self.crop, &self.agrochemical]
            .into_iter()
            .filter_map(|f| f.as_deref().map(Cow::Borrowed))
            .collect();

        if let Some(price) = self.price {
            fields.push(Cow::Owned(price.to_string()));
        }
        if let Some(raw) = self.spraying_date.as_deref() {
            fields.push(Cow::Borrowed(raw));
        }
        if let Some(at) = self.spraying_at() {
            fields.push(Cow::Owned(display_date(at.date())));
        }

        fields
    }

    fn display_name(&self) -> &str {
        self.crop.as_deref().unwrap_or(&self.id)
    }

    fn status(&self) -> Option<&RequestStatus> {
        self.status.as_ref()
    }

    fn record_date(&self) -> RecordDate {
        RecordDate::from_parsed(self.spraying_date.as_deref(), self.spraying_at())
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_instant)
    }

    fn is_well_formed(&self) -> bool {
        !self.id.trim().is_empty()
            && non_empty(&self.address)
            && non_empty(&self.crop)
            && self.status.is_some()
    }
}
