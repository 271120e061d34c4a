//! Location data sources for Envsafe CLI
//!
//! Contains the built-in watchlist of world cities and the geocoding client
//! used to resolve free-text search queries into coordinates.

pub mod geocode;
pub mod places;

pub use geocode::{GeocodeClient, GeocodeError, SearchResult};
pub use places::watchlist;

use serde::{Deserialize, Serialize};

/// A named coordinate shown in the list view
///
/// Entries come from the built-in watchlist, from geocoding search results,
/// or from an ad-hoc `--at` coordinate, so all fields are owned values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier within the current list
    pub id: String,
    /// Human-readable display name
    pub name: String,
    /// Latitude coordinate
    pub latitude: f64,
    /// Longitude coordinate
    pub longitude: f64,
}

impl Location {
    /// Creates a location from owned or borrowed parts
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            latitude,
            longitude,
        }
    }
}

/// Fallback display name for a bare coordinate, e.g. "Location (12.9716, 77.5946)"
pub fn fallback_name(lat: f64, lng: f64) -> String {
    format!("Location ({:.4}, {:.4})", lat, lng)
}
