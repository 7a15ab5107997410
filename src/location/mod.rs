mod distance;
mod geo;

pub use distance::{annotate, compare_by_proximity, format_distance, Annotated, Locatable};
pub(crate) use distance::proximity_order;
pub use geo::{haversine_km, GeoError, GeoPoint, EARTH_RADIUS_KM};
