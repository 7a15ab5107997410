// src/domain/provider.rs

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::filters::Filterable;
use crate::location::{GeoPoint, Locatable};

/// A drone-spraying service provider as listed on the discovery screen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceProvider {
    pub id: String,
    pub name: String,
    pub district: Option<String>,
    pub state: Option<String>,
    pub services: Vec<String>,
    #[serde(deserialize_with = "lenient_coordinates")]
    pub coordinates: Option<GeoPoint>,
}

/// Anything but a pair of numbers becomes `None`, so the provider stays
/// listed with an unknown distance. Out-of-range numbers are kept and
/// rejected later by [`GeoPoint::is_valid`].
fn lenient_coordinates<'de, D>(deserializer: D) -> Result<Option<GeoPoint>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| {
        let latitude = value.get("latitude")?.as_f64()?;
        let longitude = value.get("longitude")?.as_f64()?;
        Some(GeoPoint {
            latitude,
            longitude,
        })
    }))
}

impl ServiceProvider {
    /// `"Chandrapur, MAHARASHTRA"`; empty when neither part is known.
    pub fn region_label(&self) -> String {
        [self.district.as_deref(), self.state.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// First letter of the name, for the avatar bubble.
    pub fn initial(&self) -> Option<char> {
        self.name.trim().chars().next().map(|c| c.to_ascii_uppercase())
    }
}

impl Locatable for ServiceProvider {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn coordinates(&self) -> Option<GeoPoint> {
        self.coordinates
    }
}

impl Filterable for ServiceProvider {
    // Providers have no lifecycle status.
    type Status = ();

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![Cow::Borrowed(self.name.as_str())];
        fields.extend(self.district.as_deref().map(Cow::Borrowed));
        fields.extend(self.state.as_deref().map(Cow::Borrowed));
        fields.extend(self.services.iter().map(|s| Cow::Borrowed(s.as_str())));
        fields
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn is_well_formed(&self) -> bool {
        !self.id.trim().is_empty() && !self.name.trim().is_empty()
    }
}
